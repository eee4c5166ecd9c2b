use clap::{Parser, Subcommand};

mod classify;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a best-of-N match against the CPU
    Play(#[clap(flatten)] play::PlayArg),
    /// Classify hand snapshots from a JSON file
    Classify(#[clap(flatten)] classify::ClassifyArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(play::PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Classify(arg) => classify::run(&arg)?,
    }
    Ok(())
}
