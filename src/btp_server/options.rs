use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Default, Parser)]
pub struct BTPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Start a game with this many players right away.
    #[arg(short, long)]
    pub players: Option<usize>,

    /// The colour left out of a 3-player game.
    #[arg(short, long)]
    pub exclude: Option<Color>,

    /// Print the board after every placement or pass.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
