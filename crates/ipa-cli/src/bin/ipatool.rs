use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ipa_cli::commands::{accuracy_ops, config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "ipatool", about = "Pinyin to IPA conversion tool")]
struct Cli {
    /// Syllable table TOML (defaults to the embedded table)
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Mark settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Pinyin text and show its segments
    Convert {
        /// Text to convert, e.g. "ni3hao3"
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert stdin line by line
    Repl,
    /// Exact and longest-prefix lookup of a syllable
    Lookup {
        /// Romanized syllable or prefix
        key: String,
    },
    /// Run segmentation accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded syllable table
    LexiconExport,
    /// Validate a syllable table TOML file
    LexiconValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the embedded mark settings
    SettingsExport,
    /// Validate a mark settings TOML file
    SettingsValidate {
        /// TOML file to validate
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(dir) = &cli.trace_dir {
        if !cfg!(feature = "trace") {
            eprintln!("Warning: built without the `trace` feature, --trace-dir is ignored");
        }
        if let Err(e) = ipa_engine::api::trace_init(dir) {
            eprintln!("Error starting trace output: {e}");
            std::process::exit(1);
        }
    }
    let lexicon = cli.lexicon.as_deref();
    let settings = cli.settings.as_deref();

    match cli.command {
        Command::Convert { text, json } => {
            convert_ops::convert_cmd(&text, json, lexicon, settings)
        }
        Command::Repl => convert_ops::repl_cmd(lexicon, settings),
        Command::Lookup { key } => convert_ops::lookup_cmd(&key, lexicon),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(
            &corpus_file,
            category.as_deref(),
            verbose,
            json,
            lexicon,
            settings,
        ),
        Command::LexiconExport => config_ops::lexicon_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
