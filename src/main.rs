//! Binary entrypoint for the Jewel Hunt CLI.
//!
//! Commands:
//! - `play [--seed <n>]` - start an interactive session on stdin/stdout
//! - `init` - create a starter `config.toml` with the default settings
//!
//! The shell owns everything the engine treats as external: reading lines,
//! splitting them into tokens, and printing the engine's observations.

use std::io::Write as _;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use jewelhunt::config::{Config, GameConfig};
use jewelhunt::game::{Command, GameEngine, Signal};
use jewelhunt::logutil::escape_log;

#[derive(Parser)]
#[command(name = "jewelhunt")]
#[command(about = "A text adventure: collect the jewels and escape the enchanted jungle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game session
    Play {
        /// Fix the Stranger's wander pattern (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Initialize a new configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Play { seed } => {
            let config = config.unwrap_or_else(|| {
                warn!("no config at {}; using defaults", cli.config);
                Config::default()
            });
            let mut game_config = config.game.clone();
            if let Some(seed) = seed {
                game_config.rng_seed = Some(seed);
            }
            play(game_config).await
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            println!("Wrote default configuration to {}", cli.config);
            Ok(())
        }
    }
}

/// Run the interactive command loop until the player quits or wins.
async fn play(game_config: GameConfig) -> Result<()> {
    let mut engine = GameEngine::new(&game_config);
    info!("session started for {}", game_config.player_name);

    print_welcome();
    println!("{}", engine.describe_location());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            info!("stdin closed; ending session");
            break;
        };
        debug!("input: {}", escape_log(&line));

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(command) = Command::from_tokens(&tokens) else {
            continue;
        };

        let turn = engine.process_command(&command);
        println!("{}", turn.text);
        match turn.signal {
            Signal::Continue => {}
            Signal::Quit => break,
            Signal::GameOver => {
                println!("\nThank you for playing!\n");
                println!("Good bye!\n");
                break;
            }
        }
    }
    Ok(())
}

fn print_welcome() {
    println!();
    println!("Welcome to Jewel Hunt!");
    println!("=========================================================================");
    println!("Each enchanted location has a unique jewel.");
    println!("=========================================================================");
    println!("Collect all eight jewels and return them to the Temple of Jewels to win");
    println!("=========================================================================");
    println!("Move with 'go' [direction]");
    println!("Collect items with 'take' [item]");
    println!("Drop items with 'drop' [item]");
    println!("Use command word 'give' if you want to give any character an item");
    println!("Check your items with 'inventory'.");
    println!("Go back to the previous room using 'back'.");
    println!("Type 'help' if you need help.");
    println!("=========================================================================");
    println!("Good luck!");
    println!("=========================================================================");
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();

    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    // Route logs to the configured file so they stay out of game output;
    // stderr otherwise.
    if let Some(cfg) = config {
        if let Some(ref file) = cfg.logging.file {
            match std::fs::OpenOptions::new().create(true).append(true).open(file) {
                Ok(f) => {
                    builder.target(env_logger::Target::Pipe(Box::new(f)));
                }
                Err(e) => eprintln!("Could not open log file {}: {}", file, e),
            }
        }
    }

    let _ = builder.try_init();
}
