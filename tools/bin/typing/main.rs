use std::{
    io::{Write, stdout},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, arg, command};
use tracing::{Level, info};

use common::{config::read_config, spawn_cycler};
use cycler::TypingCycler;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file
    #[arg(short, long, default_value = "folio.toml")]
    config: String,

    /// log transitions to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// animate the phrases in the terminal (the default)
    Play {
        /// stop after this many seconds instead of waiting for ctrl-c
        #[arg(short, long)]
        duration: Option<u64>,
    },

    /// validate the config file and print the resulting timings
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = read_config(PathBuf::from(&cli.config)).await?;

    // building the cycler validates the phrase list and timings, so both commands start here
    let cycler = TypingCycler::from_config(&config.typing)
        .with_context(|| format!("bad typing config in {}", cli.config))?;

    match cli.command.unwrap_or(Commands::Play { duration: None }) {
        Commands::Check => check(&cycler),
        Commands::Play { duration } => play(cycler, duration).await,
    }
}

fn check(cycler: &TypingCycler) -> Result<()> {
    let timing = cycler.timing();

    println!("phrases:");
    for phrase in cycler.phrases().iter() {
        println!("  {phrase}");
    }
    println!(
        "type every {:?}, delete every {:?}, pause {:?}",
        timing.type_speed,
        timing.delete_speed(),
        timing.pause
    );

    Ok(())
}

async fn play(cycler: TypingCycler, duration: Option<u64>) -> Result<()> {
    info!(phrases = cycler.phrases().len(), "starting typing preview");

    // redraw the whole line each time, with a static caret in place of the blinking one
    let task = spawn_cycler(cycler, |cycler| {
        let mut out = stdout().lock();
        let _ = write!(out, "\r\x1b[2K{}|", cycler.displayed_text());
        let _ = out.flush();
    });

    match duration {
        Some(secs) => {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(secs)) => {}
                res = tokio::signal::ctrl_c() => res.context("failed to listen for ctrl-c")?,
            }
        }
        None => tokio::signal::ctrl_c()
            .await
            .context("failed to listen for ctrl-c")?,
    }

    task.teardown().await?;
    println!();

    info!("typing preview stopped");
    Ok(())
}
