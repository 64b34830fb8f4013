use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use cmd::command::all;
use cmd::command::all::All;
use cmd::command::products;
use cmd::command::products::Products;
use cmd::command::reviews;
use cmd::command::reviews::Reviews;
use cmd::config::Config;
use cmd::config::LogLevel;
use cmd::error::Error;
use cmd::error::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Generate products
    Products(Products),
    /// Generate reviews for an existing products file
    Reviews(Reviews),
    /// Generate products and their reviews
    All(All),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file, defaults are used when not set
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let Some(command) = &args.command else {
        return Err(Error::BadRequest("no command specified".to_string()));
    };

    let mut cfg: Config = match &args.config {
        Some(path) => {
            let config = config::Config::builder()
                .add_source(config::File::from(path.clone()))
                .build()?;
            config.try_deserialize()?
        }
        None => Config::default(),
    };
    if let Some(level) = args.log_level {
        cfg.log.level = level;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.log.level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(Error::SetGlobalDefaultError)?;

    let version = env!("CARGO_PKG_VERSION");
    let hash = option_env!("BUILD_HASH").unwrap_or("dev-build");

    info!("datagen v{version}-{hash}");

    match command {
        Commands::Products(args) => {
            products::start(args, cfg.try_into()?)?;
        }
        Commands::Reviews(args) => {
            reviews::start(args, cfg.try_into()?)?;
        }
        Commands::All(args) => {
            all::start(args, cfg.try_into()?)?;
        }
    }

    Ok(())
}
