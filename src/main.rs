use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::debug;
use markup_translator::{translate_file, TranslationLibConfig, TranslationService};
use std::path::PathBuf;
use std::process;

/// CLI wrapper for log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliLogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            CliLogLevel::Error => "error",
            CliLogLevel::Warn => "warn",
            CliLogLevel::Info => "info",
            CliLogLevel::Debug => "debug",
            CliLogLevel::Trace => "trace",
        }
    }
}

/// Translate the text of a .txt or .html file, keeping markup tags intact.
///
/// The result is written next to the input as <name>_<target><ext>.
#[derive(Parser, Debug)]
#[command(name = "markup-translator", version, about)]
struct CommandLineOptions {
    /// Input file (.txt or .html)
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Configuration file path (defaults to translator-config.toml, config.toml
    /// or .translator-config.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source language code (e.g. 'ru')
    #[arg(short, long)]
    source_lang: Option<String>,

    /// Target language code (e.g. 'en')
    #[arg(short, long)]
    target_lang: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: CliLogLevel,
}

fn init_logging(level: CliLogLevel) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_filter()))
        .target(env_logger::Target::Stdout)
        .format_target(false)
        .init();
}

fn load_config(options: &CommandLineOptions) -> Result<TranslationLibConfig> {
    let mut config = match &options.config {
        Some(path) => TranslationLibConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TranslationLibConfig::load_from_default_locations(),
    };

    if let Some(source_lang) = &options.source_lang {
        config.translation.source_lang = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_lang {
        config.translation.target_lang = target_lang.clone();
    }

    Ok(config)
}

async fn run(options: CommandLineOptions) -> Result<PathBuf> {
    let config = load_config(&options)?;
    debug!("Using configuration: {:?}", config.translation);

    let service = TranslationService::new(config.translation)
        .context("failed to create translation service")?;
    let output = translate_file(&options.input_file, &service).await?;
    Ok(output)
}

#[tokio::main]
async fn main() {
    let options = match CommandLineOptions::try_parse() {
        Ok(options) => options,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            print!("{}", e.render());
            process::exit(1);
        }
    };

    init_logging(options.log_level);

    let input = options.input_file.clone();
    match run(options).await {
        Ok(output) => {
            println!(
                "successfully translated {} to {}",
                input.display(),
                output.display()
            );
        }
        Err(e) => {
            println!("error: {:#}", e);
            process::exit(1);
        }
    }
}
