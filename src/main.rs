#[macro_use]
extern crate log;

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod generator;
pub mod metrics;
pub mod notifier;
pub mod repl;
pub mod traits;
pub mod transformer;


use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;

use cli::Cli;
use clipboard::CommandClipboard;
use config::Config;
use generator::FlagGenerator;
use notifier::ConsoleNotifier;
use transformer::FlagTransformer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::build(cli.config.as_deref(), &cli.overrides())?;

    debug!("loaded config: {config:?}");

    metrics::register_metrics();

    let clipboard = Arc::new(CommandClipboard::new(&config.clipboard_command)?);
    let transformer = FlagTransformer::new(config.mode, &config.prefix);

    match cli.text {
        Some(text) => {
            // stdout carries only the flag, so success toasts stay quiet
            let mut generator = FlagGenerator::new(
                transformer,
                Duration::ZERO,
                clipboard,
                Arc::new(ConsoleNotifier::quiet()),
            );

            repl::one_shot(&mut generator, &text, cli.copy, &mut std::io::stdout()).await?;
        }
        None => {
            let mut generator = FlagGenerator::new(
                transformer,
                config.generation_delay,
                clipboard,
                Arc::new(ConsoleNotifier::new()),
            );

            repl::run(
                &mut generator,
                BufReader::new(tokio::io::stdin()),
                &mut std::io::stdout(),
            )
            .await?;
        }
    }

    Ok(())
}
