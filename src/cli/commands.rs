use clap::{Parser, Subcommand};
use postwright::AuthCommands;
use std::path::PathBuf;

/// `Postwright` - persona-driven LinkedIn post drafting and publishing.
#[derive(Parser, Debug)]
#[command(name = "postwright")]
#[command(version)]
#[command(about = "Draft LinkedIn posts with Gemini and publish them on a schedule.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.postwright/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enter topics one at a time and review each draft (default)
    Interactive,

    /// Generate one post now and publish it
    Once {
        /// Topic to write about (a random configured topic when omitted)
        #[arg(short, long)]
        topic: Option<String>,

        /// Print the draft without publishing it
        #[arg(long)]
        no_publish: bool,
    },

    /// Post at the configured times of day until interrupted
    Schedule,

    /// Print the rendered prompt for a topic without calling any service
    Prompt {
        #[arg(short, long)]
        topic: String,
    },

    /// Verify the LinkedIn token, person id and posting permission
    Check,

    /// LinkedIn authorization helpers
    Auth {
        #[command(subcommand)]
        auth_command: AuthCommands,
    },
}
