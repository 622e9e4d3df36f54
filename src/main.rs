mod model;
mod server;

use std::sync::Arc;

use clap::Parser;
use serenity::http::Http;
use tokio::task::JoinSet;

use crate::server::{
    bot::{self, commands::Data},
    config::Config,
    error::AppError,
    logging, router,
    scheduler::event_lifecycle,
    startup,
};

/// Discord event scheduling bot with a read-only events API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Run only the web API
    #[arg(long, conflicts_with = "bot")]
    webapi: bool,

    /// Run only the Discord bot
    #[arg(long)]
    bot: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let _log_guard = logging::init(logging::log_dir());

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting schedulebot {}", env!("CARGO_PKG_VERSION"));

    let mut tasks = JoinSet::new();

    if !args.bot {
        let web_db = db.clone();
        let addr = config.web_api_addr.clone();
        tasks.spawn(async move {
            if let Err(e) = router::serve(&addr, web_db).await {
                tracing::error!("Web API error: {}", e);
            }
        });
    }

    if !args.webapi {
        match config.discord_bot_token.clone() {
            Some(token) => {
                let discord_http = Arc::new(Http::new(&token));
                event_lifecycle::start_scheduler(db.clone(), discord_http).await?;

                let data = Data {
                    db: db.clone(),
                    http_client: startup::setup_reqwest_client()?,
                    event_role_prefix: config.event_role_prefix.clone(),
                    import_utc_offset: config.import_utc_offset,
                };
                tasks.spawn(bot::start::run_bot(token, data));
            }
            None => tracing::warn!("DISCORD_BOT_TOKEN is not set, skipping the Discord bot"),
        }
    }

    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            tracing::error!("Task failed: {}", e);
        }
    }

    Ok(())
}
