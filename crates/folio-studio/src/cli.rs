use clap::{Args, Parser, Subcommand};

/// Runs the portfolio's hero backdrop or contact form outside the browser.
#[derive(Parser, Debug)]
#[command(name = "folio-studio", version, about, long_about = None)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "folio_motion=debug" (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a window with the animated gear backdrop (default)
    Hero(HeroArgs),
    /// Fill in the contact form from the terminal
    Contact(ContactArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Hero(HeroArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct HeroArgs {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Upper bound on the number of gears
    #[arg(long, default_value_t = 10)]
    pub max_gears: usize,

    /// Seed for a reproducible gear layout
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for HeroArgs {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0, max_gears: 10, seed: None }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    /// Simulated submission latency in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub delay_ms: u64,
}
