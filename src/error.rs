//! Error types for catalog loading
//!
//! Only deployment-level problems are errors here. Missing translation keys,
//! missing substitution values, and malformed placeholders are all defined,
//! recoverable outcomes handled inside the lookup and interpolation tiers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The module has no language directory at all
    #[error("language directory not found: {}", path.display())]
    LanguageDirMissing { path: PathBuf },

    /// The default language file, the fallback for every lookup, is absent
    #[error("default language file '{language}.ini' not found in {}", dir.display())]
    DefaultLanguageMissing { language: String, dir: PathBuf },

    /// A language file exists but could not be read
    #[error("failed to read language file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
