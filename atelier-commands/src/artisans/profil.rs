use poise::serenity_prelude as serenity;

use atelier_core::{Context, Error};
use atelier_store::impls::profiles::profile_of;
use atelier_store::queries::sorted_profile;

use crate::artisans::embeds::{guild_only_message, profile_embed};
use crate::artisans::say_ephemeral;

/// Affiche les métiers d'un joueur
#[poise::command(slash_command, category = "Artisans")]
pub async fn profil(
    ctx: Context<'_>,
    #[description = "Le membre à afficher"] membre: Option<serenity::Member>,
) -> Result<(), Error> {
    if ctx.guild_id().is_none() {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    // Le membre demandé, sinon l'auteur de la commande.
    let (user_id, display_name, avatar_url) = match membre {
        Some(member) => (
            member.user.id,
            member.display_name().to_owned(),
            member.face(),
        ),
        None => match ctx.author_member().await {
            Some(member) => (
                member.user.id,
                member.display_name().to_owned(),
                member.face(),
            ),
            None => {
                let author = ctx.author();
                (
                    author.id,
                    author
                        .global_name
                        .clone()
                        .unwrap_or_else(|| author.name.clone()),
                    author.face(),
                )
            }
        },
    };

    let Some(record) = profile_of(&ctx.data().store, user_id.get()).await? else {
        say_ephemeral(
            &ctx,
            format!("😕 {display_name} n'a pas encore enregistré de métiers."),
        )
        .await?;
        return Ok(());
    };

    let professions = sorted_profile(&record);
    let embed = profile_embed(&display_name, &avatar_url, &professions);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
