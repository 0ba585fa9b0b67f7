//! Lingo CLI
//!
//! Usage:
//!   lingo [OPTIONS] [KEY] [VALUES...]
//!
//! With a KEY, translates that key with positional VALUES. Without one,
//! prints the demo page: localized headings, project facts, and the counting
//! demo with its client transfer script.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use lingo::{
    available_languages, CatalogLocalizer, ClientTransfer, Localizer, ModuleConfig, Values,
};

#[derive(Parser)]
#[command(name = "lingo")]
#[command(about = "Module-scoped localization catalog with placeholder interpolation")]
struct Cli {
    /// Language key to translate (prints the demo page if omitted)
    key: Option<String>,

    /// Positional substitution values for the key
    values: Vec<String>,

    /// Directory containing <Language>.ini files
    #[arg(short = 'd', long, default_value = "lang")]
    lang_dir: PathBuf,

    /// Language to load (overrides the config selection)
    #[arg(short, long)]
    language: Option<String>,

    /// Module settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List available languages and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ModuleConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ModuleConfig::default(),
    };

    if cli.list {
        match available_languages(&cli.lang_dir) {
            Ok(languages) => {
                for name in languages.keys() {
                    println!("{}", name);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let language = cli
        .language
        .as_deref()
        .unwrap_or_else(|| config.active_language());
    let localizer = match CatalogLocalizer::from_language_dir(
        &cli.lang_dir,
        &config.prefix,
        &config.default_language,
        language,
    ) {
        Ok(localizer) => localizer,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match &cli.key {
        Some(key) => {
            println!("{}", localizer.tt(key, &Values::positional(&cli.values)));
        }
        None => print_demo_page(&localizer, &config),
    }
}

/// Render the demo page to stdout.
///
/// Project facts are canned; the point is showing key resolution, the
/// singular/plural key choice, and the client transfer hand-off.
fn print_demo_page(localizer: &CatalogLocalizer, config: &ModuleConfig) {
    let none = Values::new();

    println!("# {}", localizer.tt("module_name", &none));
    println!("{}", localizer.tt("module_desc", &none));
    println!();
    println!("## {}", localizer.tt("info_header", &none));

    let record_id_field = "record_id";
    let instruments = ["Enrollment", "Baseline", "Follow-up"];
    let n_fields = 42;
    let instruments_key = if instruments.len() == 1 {
        "num_instruments_singular"
    } else {
        "num_instruments_plural"
    };
    println!(
        "- {}",
        localizer.tt("record_id", &Values::positional([record_id_field]))
    );
    println!(
        "- {}",
        localizer.tt(
            instruments_key,
            &Values::positional([instruments.len().to_string(), n_fields.to_string()])
        )
    );

    let count = config.effective_count();
    if count > 0 {
        println!();
        println!("**{}**", localizer.tt("fun_title", &none));
        println!(
            "{}",
            localizer.tt("fun_explained", &Values::positional([count]))
        );

        let numbers: Vec<u64> = (1..=count).collect();
        let mut transfer = ClientTransfer::new();
        transfer.add_value(Some(&config.prefix), "array", numbers);
        transfer.add_translation(localizer, "countup", &Values::positional([count]));
        println!("{}", transfer.to_script());
    }
}
