use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Personal contact book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Path to the address book file (defaults to the user data directory)
    #[arg(short, long)]
    pub store: Option<PathBuf>,
}
