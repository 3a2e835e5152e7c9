use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "simplesite")]
#[command(about = "A small site listing custom entities.")]
pub struct CommandLine {
    /// JSON file of entities to serve instead of the bundled demo content
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Allow ?mode=preview and ?mode=edit to show unpublished entities
    #[arg(long)]
    pub visual_editor: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
