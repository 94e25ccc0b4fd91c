//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;

use rubrix_shared::{
    AppConfig, ExtractConfig, RubrixError, config_file_path, init_config, load_config,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// rubrix — extract a structured index from awesome-list documents.
#[derive(Parser)]
#[command(
    name = "rubrix",
    version,
    about = "Extract the rubric/entry tree of an awesome-list markdown document.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract the index from an awesome-list markdown file.
    Extract(ExtractArgs),

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the `extract` subcommand.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    /// Path to the markdown document.
    pub path: PathBuf,

    /// Where to write the human-readable listing (default from config).
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Where to write the JSON export (default from config).
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Skip the text listing artifact.
    #[arg(long)]
    pub no_text: bool,

    /// Skip the JSON export artifact.
    #[arg(long)]
    pub no_json: bool,

    /// Spaces of indentation per nesting level (overrides config).
    #[arg(long)]
    pub spacing: Option<u32>,

    /// Print the listing to stdout as well.
    #[arg(long)]
    pub stdout: bool,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract(args) => {
            let config = load_config()?;
            cmd_extract(&args, &config)
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_extract(args: &ExtractArgs, config: &AppConfig) -> Result<()> {
    let extract_config = ExtractConfig {
        sub_list_spacing: args.spacing.unwrap_or(config.defaults.sub_list_spacing),
    };

    let source = std::fs::read_to_string(&args.path)
        .map_err(|e| RubrixError::io(&args.path, e))?;

    info!(path = %args.path.display(), "extracting awesome list");
    let list = rubrix_extract::extract(&source, &extract_config)?;

    if !args.no_text {
        let out = args
            .text
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.defaults.text_output));
        rubrix_artifacts::write_listing(&list, &out)?;
        println!("  Listing: {}", out.display());
    }

    if !args.no_json {
        let out = args
            .json
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.defaults.json_output));
        rubrix_artifacts::write_json(&list, &out)?;
        println!("  Export:  {}", out.display());
    }

    if args.stdout {
        print!("{}", rubrix_artifacts::render_listing(&list));
    }

    println!("  Rubrics: {}", list.rubrics.len());
    println!("  Entries: {}", list.entry_count());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("  Config written: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let rendered =
        toml::to_string_pretty(&config).map_err(|e| RubrixError::config(e.to_string()))?;
    println!("# {}", config_file_path()?.display());
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../fixtures/md")
            .join(name)
    }

    #[test]
    fn cli_parses_extract_flags() {
        let cli = Cli::try_parse_from([
            "rubrix", "extract", "list.md", "--spacing", "4", "--no-json", "--stdout",
        ])
        .expect("parse");

        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.path, PathBuf::from("list.md"));
                assert_eq!(args.spacing, Some(4));
                assert!(args.no_json);
                assert!(!args.no_text);
                assert!(args.stdout);
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn cli_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["rubrix"]).is_err());
    }

    #[test]
    fn extract_writes_both_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let text = dir.path().join("output.txt");
        let json = dir.path().join("json.txt");

        let args = ExtractArgs {
            path: fixture_path("awesome-basic.md"),
            text: Some(text.clone()),
            json: Some(json.clone()),
            no_text: false,
            no_json: false,
            spacing: None,
            stdout: false,
        };

        cmd_extract(&args, &AppConfig::default()).expect("extract");

        let listing = std::fs::read_to_string(&text).expect("listing");
        assert!(listing.contains(" - Alpha - the first tool. [https://alpha.example.com]"));

        let export = std::fs::read_to_string(&json).expect("export");
        let parsed = rubrix_artifacts::parse_export(&export).expect("parse export");
        assert_eq!(parsed.rubrics.len(), 2);
    }

    #[test]
    fn extract_missing_input_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ExtractArgs {
            path: dir.path().join("nope.md"),
            text: None,
            json: None,
            no_text: true,
            no_json: true,
            spacing: None,
            stdout: false,
        };

        let err = cmd_extract(&args, &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
