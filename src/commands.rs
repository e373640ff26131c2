use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gallery-fill")]
#[command(about = "Generate the missing illustrations for a catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Commands {
    /// Generate and store an image for every catalog entity that has none (default)
    Fill,
    /// List catalog entities that have no stored image, without generating anything
    Missing,
    /// Print configuration values
    PrintConfig,
}
