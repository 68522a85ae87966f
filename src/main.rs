//! Binary entrypoint for the Angrams CLI.
//!
//! Commands:
//! - `start [--user <name>]` - run a local console session against the store
//! - `init` - create a starter `config.toml`
//! - `status` - print dictionary and store statistics
//!
//! The console session in `start` is a development surface: it feeds typed
//! lines straight into the same command handler a chat transport adapter
//! would call, echoing response text and progress tokens.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use angrams::bot::Bot;
use angrams::config::Config;
use angrams::dictionary::DictionaryIndex;
use angrams::storage::GameStore;

#[derive(Parser)]
#[command(name = "angrams")]
#[command(about = "An anagram word-guessing game service for chat platforms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a local console session
    Start {
        /// User name commands are attributed to
        #[arg(short, long, default_value = "local")]
        user: String,
    },
    /// Initialize a new configuration file
    Init,
    /// Show dictionary and store statistics
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Start { user } => {
            let config = Config::load(&cli.config).await?;
            start(config, &user).await
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            println!("Wrote starter configuration to {}", cli.config);
            println!("Point dictionary.path at a letter-indexed word corpus before starting.");
            Ok(())
        }
        Commands::Status => {
            let config = Config::load(&cli.config).await?;
            let dictionary = DictionaryIndex::load(&config.dictionary.path).await?;
            let store = GameStore::open(&config.storage.data_dir)?;
            println!("{} status", config.bot.name);
            println!("  dictionary: {} words ({})", dictionary.word_count(), config.dictionary.path);
            println!("  store:      {} games ({})", store.game_count(), config.storage.data_dir);
            Ok(())
        }
    }
}

async fn start(config: Config, user: &str) -> Result<()> {
    // Dictionary load is fatal: nothing downstream works without words.
    let dictionary = Arc::new(DictionaryIndex::load(&config.dictionary.path).await?);
    let store = Arc::new(GameStore::open(&config.storage.data_dir)?);
    info!(
        "{} ready: {} dictionary words, {} stored games",
        config.bot.name,
        dictionary.word_count(),
        store.game_count()
    );
    let bot = Bot::new(dictionary, store, config.games.clone());

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"Type commands ('help' to list them, 'quit' to exit)\n")
        .await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        let response = bot.handle_command(user, line);
        stdout.write_all(response.text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        if let Some(token) = response.token {
            stdout
                .write_all(format!("(token: {})\n", token).as_bytes())
                .await?;
        }
        stdout.flush().await?;
    }
    info!("console session closed");
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the config level
    let level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    if let Some(path) = file {
        if let Ok(f) = std::fs::OpenOptions::new().create(true).append(true).open(&path) {
            let sink = std::sync::Arc::new(std::sync::Mutex::new(f));
            // When stdout is a TTY (foreground run) mirror records to the
            // console as well; otherwise the file is the only destination.
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = sink.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
