mod cli;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use olha_client::{ApiConfig, ChatApi, WsRoute};
use olha_types::events::ChatMessage;

use cli::{ChannelCommand, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olha_cli=info,olha_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config: explicit flag wins over the environment
    let config = match cli.origin {
        Some(origin) => ApiConfig::new(origin)?,
        None => ApiConfig::from_env()?,
    };
    info!("Using API at {}", config.api_base());

    let api = ChatApi::new(config)?;

    match cli.command {
        Command::Login(creds) => {
            print_json(&api.users.login(&creds.username, &creds.password).await?)?
        }
        Command::Register(creds) => {
            print_json(&api.users.register(&creds.username, &creds.password).await?)?
        }
        Command::Channels(ChannelCommand::List) => {
            print_json(&api.channels.list_channels().await?)?
        }
        Command::Channels(ChannelCommand::Create {
            name,
            description,
            user,
        }) => {
            let channel = api
                .channels
                .create_channel(&name, description.as_deref(), user)
                .await?;
            print_json(&channel)?
        }
        Command::Channels(ChannelCommand::Delete { channel_id, user }) => {
            api.channels.delete_channel(channel_id, user).await?;
            println!("deleted channel {}", channel_id);
        }
        Command::History { channel_id } => {
            let history = api.messages.get_history(channel_id).await?;
            let chat: Vec<ChatMessage> = history.iter().map(ChatMessage::from).collect();
            print_json(&chat)?
        }
        Command::WsUrl(args) => {
            let route = match args.channel {
                Some(channel_id) => WsRoute::PerChannel {
                    channel_id,
                    user_id: args.user_id,
                },
                None => WsRoute::PerUser {
                    user_id: args.user_id,
                },
            };
            println!("{}", api.ws_url(route));
        }
        Command::Health => print_json(&api.health.check().await?)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
