use anyhow::Result;
use clap::Parser;
use kasiski::cli::{Cli, Commands};
use kasiski::commands::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            key_length,
            shift_max,
            format,
            output,
        } => handle_analyze(AnalyzeConfig {
            path,
            key_length,
            shift_max,
            format,
            output,
        }),
    }
}
