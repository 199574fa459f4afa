use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use wordid_core::{Case, Dictionary, GeneratorConfig, IdGenerator, Result, WordList, batch_amount};

#[derive(Parser)]
#[command(name = "wordid")]
#[command(about = "Memorable identifiers made of dictionary words")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to <config dir>/wordid/config.toml when present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate identifiers
    Next {
        /// Number of identifiers (one when omitted)
        #[arg(allow_negative_numbers = true)]
        amount: Option<i64>,
        /// String placed between words
        #[arg(long, short)]
        delimiter: Option<String>,
        /// Words per identifier
        #[arg(long, short)]
        parts: Option<usize>,
        /// Word list file, one word per line
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// Casing applied to each word: keep, lower, upper, capitalize
        #[arg(long)]
        case: Option<Case>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Print a JSON array instead of one identifier per line
        #[arg(long)]
        json: bool,
    },
    /// Print the number of words in the dictionary
    Size {
        /// Word list file, one word per line
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
    /// Print the words at the given positions (out-of-range positions are clamped)
    Lookup {
        /// 0-based word positions
        #[arg(required = true, allow_negative_numbers = true)]
        positions: Vec<i64>,
        /// Word list file, one word per line
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    if let Err(e) = run_command(cli.command, cli.config.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordid={level},wordid_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    match command {
        Commands::Next {
            amount,
            delimiter,
            parts,
            dictionary,
            case,
            seed,
            json,
        } => {
            let config = GeneratorConfig {
                delimiter: delimiter.unwrap_or(config.delimiter),
                parts: parts.unwrap_or(config.parts),
                dictionary: dictionary.or(config.dictionary),
                case: case.unwrap_or(config.case),
                seed: seed.or(config.seed),
            };
            generate(&config, amount, json)
        }
        Commands::Size { dictionary } => {
            let words = open_dictionary(dictionary.or(config.dictionary))?;
            println!("{}", words.size());
            Ok(())
        }
        Commands::Lookup {
            positions,
            dictionary,
        } => {
            let words = open_dictionary(dictionary.or(config.dictionary))?;
            for word in words.read_words(&positions)? {
                println!("{}", word);
            }
            Ok(())
        }
    }
}

/// Explicit `--config` must exist; the per-user file is optional.
fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = path {
        debug!(path = %path.display(), "loading config");
        return GeneratorConfig::load(path);
    }
    match dirs::config_dir().map(|dir| dir.join("wordid").join("config.toml")) {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading user config");
            GeneratorConfig::load(path)
        }
        _ => Ok(GeneratorConfig::default()),
    }
}

fn open_dictionary(path: Option<PathBuf>) -> Result<WordList> {
    match path {
        Some(path) => WordList::from_path(path),
        None => WordList::default_words(),
    }
}

fn generate(config: &GeneratorConfig, amount: Option<i64>, json: bool) -> Result<()> {
    let amount = batch_amount(amount.unwrap_or(1))?;
    let mut generator = IdGenerator::from_config(config)?;
    let ids = generator.next_batch(amount)?;

    if json {
        let out = serde_json::to_string_pretty(&ids).map_err(std::io::Error::other)?;
        println!("{}", out);
    } else {
        for id in ids {
            println!("{}", id);
        }
    }
    Ok(())
}
