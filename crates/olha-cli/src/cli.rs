use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the Olha chat API", long_about = None)]
pub struct Cli {
    /// Server origin. Overrides OLHA_API_BASE.
    #[arg(long, global = true)]
    pub origin: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and print the user.
    Login(Credentials),
    /// Create an account and print the new user.
    Register(Credentials),
    /// List, create or delete channels.
    #[command(subcommand)]
    Channels(ChannelCommand),
    /// Print a channel's stored messages as chat messages.
    History {
        channel_id: i64,
    },
    /// Print the live WebSocket URL for a user.
    WsUrl(WsUrlArgs),
    /// Query the server's health endpoint.
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum ChannelCommand {
    List,
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Id of the creating user.
        #[arg(long)]
        user: i64,
    },
    Delete {
        channel_id: i64,
        /// Id of the user asking for deletion.
        #[arg(long)]
        user: i64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WsUrlArgs {
    pub user_id: i64,

    /// Address a per-channel socket (older servers).
    #[arg(long)]
    pub channel: Option<i64>,
}
