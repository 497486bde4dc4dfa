use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "foliochat", version, about = "Portfolio chat backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,

    /// Chat with the portfolio assistant from the terminal
    Chat {
        /// Session to record the conversation under
        #[arg(short, long, default_value = "default")]
        session: String,
    },

    /// Inspect or clear stored chat history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Print every turn of a session
    Show {
        #[arg(short, long, default_value = "default")]
        session: String,
    },

    /// Delete every turn of a session
    Clear {
        #[arg(short, long, default_value = "default")]
        session: String,
    },
}
