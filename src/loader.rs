//! Language file discovery, parsing, and catalog construction
//!
//! A module ships one `<Language>.ini` file per language in a single
//! directory. Loading merges the selected language over the default one, so
//! the default fills any keys a translation has not covered yet, then scopes
//! every key with the module prefix into a flat [`Catalog`].

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{scoped_key, Catalog};
use crate::error::CatalogError;

/// File extension of language files, matched case-insensitively
const LANGUAGE_EXT: &str = "ini";

/// Scan `dir` for language files.
///
/// Returns language name (file stem, case sensitive) to file path, sorted by
/// name. The directory must exist; an empty directory is fine at this stage.
pub fn available_languages(dir: &Path) -> Result<BTreeMap<String, PathBuf>, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::LanguageDirMissing {
            path: dir.to_path_buf(),
        });
    }
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut languages = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_language_file = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(LANGUAGE_EXT));
        if !is_language_file {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            languages.insert(stem.to_string(), path);
        }
    }
    Ok(languages)
}

/// Parse INI-style `key=value` lines into a flat map.
///
/// `[section]` headers are flattened away, `;` and `#` start comment lines,
/// and values may be wrapped in single or double quotes. Lines without `=`
/// are skipped with a warning rather than failing the whole file.
pub fn parse_language_file(content: &str) -> HashMap<String, String> {
    let mut strings = HashMap::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            log::warn!("skipping malformed language line {}: {:?}", index + 1, raw);
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            log::warn!("skipping language line {} with empty key", index + 1);
            continue;
        }
        strings.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    strings
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Load and merge language files into a module-scoped catalog.
///
/// The default language file must exist (a deployment without it is broken);
/// the selected language overlays it key by key. A missing selected-language
/// file is not an error, the default is simply used throughout.
pub fn load_catalog(
    dir: &Path,
    module: &str,
    default_language: &str,
    language: &str,
) -> Result<Catalog, CatalogError> {
    let files = available_languages(dir)?;
    let default_path =
        files
            .get(default_language)
            .ok_or_else(|| CatalogError::DefaultLanguageMissing {
                language: default_language.to_string(),
                dir: dir.to_path_buf(),
            })?;

    let mut merged = parse_language_file(&read(default_path)?);
    if language != default_language {
        match files.get(language) {
            Some(path) => {
                merged.extend(parse_language_file(&read(path)?));
            }
            None => {
                log::debug!(
                    "no language file for '{}', falling back to '{}'",
                    language,
                    default_language
                );
            }
        }
    }

    let catalog: Catalog = merged
        .into_iter()
        .map(|(key, template)| (scoped_key(Some(module), &key), template))
        .collect();
    log::debug!(
        "loaded {} strings for module '{}' (language '{}')",
        catalog.len(),
        module,
        language
    );
    Ok(catalog)
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_pairs() {
        let strings = parse_language_file("a=1\nb = two words\n");
        assert_eq!(strings.get("a").map(String::as_str), Some("1"));
        assert_eq!(strings.get("b").map(String::as_str), Some("two words"));
    }

    #[test]
    fn test_parse_skips_comments_and_sections() {
        let strings = parse_language_file("; comment\n# also comment\n[section]\nkey=value\n");
        assert_eq!(strings.len(), 1);
        assert_eq!(strings.get("key").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_parse_unquotes_values() {
        let strings = parse_language_file("a=\"quoted\"\nb='single'\nc=\"\"\n");
        assert_eq!(strings.get("a").map(String::as_str), Some("quoted"));
        assert_eq!(strings.get("b").map(String::as_str), Some("single"));
        assert_eq!(strings.get("c").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_keeps_equals_in_value() {
        let strings = parse_language_file("formula=a = b\n");
        assert_eq!(strings.get("formula").map(String::as_str), Some("a = b"));
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let strings = parse_language_file("just some text\nkey=value\n=no key\n");
        assert_eq!(strings.len(), 1);
        assert!(strings.contains_key("key"));
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let err = available_languages(Path::new("/nonexistent/lang/dir")).unwrap_err();
        assert!(matches!(err, CatalogError::LanguageDirMissing { .. }));
    }
}
