use std::time::Duration;

use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{
        commands::{commands, on_error, Data},
        handler::Handler,
    },
    error::AppError,
};

/// Wait between a lost gateway connection and the next attempt.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

fn intents() -> GatewayIntents {
    // MESSAGE_CONTENT is privileged - must be enabled in the Discord Developer Portal
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the poise framework serving the slash commands.
///
/// Commands are registered globally once the gateway is ready.
fn build_framework(data: Data) -> poise::Framework<Data, AppError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    "Registered {} commands for {}",
                    framework.options().commands.len(),
                    ready.user.name
                );
                Ok(data)
            })
        })
        .build()
}

/// Connects to Discord and runs until the gateway connection ends.
///
/// # Arguments
/// - `token` - Bot token
/// - `data` - Command state; its database connection is shared with the event handler
///
/// # Returns
/// - `Ok(())` if the connection closed cleanly
/// - `Err(AppError)` if the client could not be built or the connection failed
pub async fn start_bot(token: &str, data: Data) -> Result<(), AppError> {
    let handler = Handler::new(data.db.clone());

    let mut client = Client::builder(token, intents())
        .framework(build_framework(data))
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Keeps the bot connected, retrying after a fixed delay whenever the connection ends.
///
/// Never returns.
pub async fn run_bot(token: String, data: Data) {
    loop {
        match start_bot(&token, data.clone()).await {
            Ok(()) => tracing::warn!("Discord connection closed"),
            Err(e) => tracing::error!("Discord bot error: {}", e),
        }

        tracing::info!(
            "Reconnecting to Discord in {} seconds",
            RECONNECT_DELAY.as_secs()
        );
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}
