//! Coursebot Control - chat with the course assistant from a terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coursebot_common::{Catalog, CoursebotConfig, CoursebotError};
use coursebotctl::repl::{start_repl, ReplStyle};
use coursebotctl::session::ChatSession;
use coursebotctl::views::courses::catalog_listing;
use coursebotctl::views::profile::level_table;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Version is embedded at build time
const VERSION: &str = env!("COURSEBOT_VERSION");

#[derive(Parser)]
#[command(name = "coursebotctl")]
#[command(about = "Coursebot - gamified course assistant", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Config file (overrides $COURSEBOT_CONFIG and the default locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "coursebot_common=info" (default: warn)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print replies at once instead of revealing them word by word
    #[arg(long, global = true)]
    no_typing: bool,

    /// Subcommand (if not provided, starts the chat)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat
    Chat,

    /// Send one message to a fresh session and print the replies
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// List every category and course
    Catalog,

    /// Show the level tiers and their XP thresholds
    Levels,

    /// Print the effective configuration as TOML
    Config,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<CoursebotError>()
            .map_or(1, CoursebotError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CoursebotConfig::load(cli.config.as_deref())?;
    if cli.no_typing {
        config.typing.enabled = false;
    }
    debug!(?config, "effective config");

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let style = ReplStyle::detect(config.typing.clone());
            let mut session = ChatSession::from_config(config)?;
            start_repl(&mut session, &style)
        }
        Commands::Ask { message } => {
            let mut session = ChatSession::from_config(config)?;
            let today = chrono::Local::now().date_naive();
            let mut reply = session.handle(&message.join(" "), today);
            // No one is there to answer a rating prompt
            if reply.rating_target.take().is_some() {
                reply.messages.pop();
                reply.messages.extend(session.skip_rating().messages);
            }
            println!("{}", reply.messages.join("\n\n"));
            Ok(())
        }
        Commands::Catalog => {
            println!("{}", catalog_listing(&Catalog::builtin()?));
            Ok(())
        }
        Commands::Levels => {
            println!("{}", level_table(Catalog::builtin()?.levels()));
            Ok(())
        }
        Commands::Config => {
            let toml = config
                .to_toml_string()
                .context("failed to render configuration")?;
            print!("{}", toml);
            Ok(())
        }
    }
}
