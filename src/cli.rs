use clap::Parser;
use std::path::PathBuf;

use crate::namer::NameTemplate;

#[derive(Parser, Debug)]
#[command(name = "seqrename")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename files with per-type sequence numbers")]
pub struct Args {
    /// Directory whose files should be renamed
    #[arg(long, env = "SEQRENAME_DIR", required_unless_present = "revert")]
    pub dir: Option<PathBuf>,

    /// Also process subdirectories (counters restart in each directory)
    #[arg(short, long)]
    pub recursive: bool,

    /// Layout of the new file names
    #[arg(short, long, value_enum, default_value_t = NameTemplate::Stem)]
    pub template: NameTemplate,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write a JSON log of the renames to this file
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Undo the renames recorded in a history file
    #[arg(long, value_name = "HISTORY_FILE", conflicts_with = "dir")]
    pub revert: Option<PathBuf>,
}
