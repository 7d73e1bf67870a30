//! padctl - OpenPaddle control CLI
//!
//! Runs the haptic engine against the virtual device for demos and timing
//! diagnostics. Real hardware backends plug in through the same
//! `HapticDevice` trait the virtual device implements.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "padctl")]
#[command(about = "OpenPaddle CLI - run haptic pong sessions and timing diagnostics")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless pong rally against the virtual device
    Demo {
        /// How long to run, in seconds
        #[arg(long, default_value_t = 5)]
        seconds: u64,

        /// Consumer frame rate in Hz
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },

    /// Run the servo loop idle and report timing health
    Timing {
        /// How long to run, in seconds
        #[arg(long, default_value_t = 3)]
        seconds: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("padctl={log_level},openpaddle={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Demo { seconds, fps } => commands::demo::execute(seconds, fps),
        Commands::Timing { seconds } => commands::timing::execute(seconds),
    }
}
