use std::env;
use std::path::{Path, PathBuf};

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use atelier_commands::artisans::embeds::ERROR_EMBED_COLOR;
use atelier_core::{Data, Error};
use atelier_store::ProfileStore;

/// Directory mounted in the hosted deployment; the roster document lives
/// there when it exists, next to the binary otherwise.
const DEPLOY_DATA_DIR: &str = "/app/data";
const DOCUMENT_NAME: &str = "artisans.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN")?;
    let guild_id = match env::var("DISCORD_GUILD_ID") {
        Ok(raw) => Some(raw.parse::<u64>()?),
        Err(_) => None,
    };

    let store_path = resolve_store_path();
    let store = ProfileStore::new(&store_path);

    // A priming read surfaces a corrupt document at startup instead of in
    // the middle of someone's command.
    let profiles = store.snapshot().await?;
    info!(
        path = %store_path.display(),
        artisans = profiles.len(),
        "roster document loaded"
    );

    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: atelier_commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            let store = store.clone();
            Box::pin(async move {
                info!("L'Atelier ouvre ses portes !");

                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        info!(guild_id, "commands registered in guild");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        info!("commands registered globally");
                    }
                }

                Ok(Data { store })
            })
        })
        .build();

    info!("Atelier is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

fn resolve_store_path() -> PathBuf {
    if let Ok(path) = env::var("ARTISANS_DATA_PATH") {
        return PathBuf::from(path);
    }

    let deploy_dir = Path::new(DEPLOY_DATA_DIR);
    if deploy_dir.exists() {
        deploy_dir.join(DOCUMENT_NAME)
    } else {
        PathBuf::from(DOCUMENT_NAME)
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Erreur")
                .description("Une erreur est survenue pendant l'exécution de la commande.")
                .color(ERROR_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = format!("Utilisation : `/{}`", ctx.command().qualified_name);
            let description = if let Some(input) = input {
                format!("Argument invalide : `{}`\n{}", input, usage)
            } else {
                format!("Argument obligatoire manquant.\n{}", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}
