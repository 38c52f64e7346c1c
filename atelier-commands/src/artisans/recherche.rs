use poise::serenity_prelude as serenity;

use atelier_core::{Context, Error};
use atelier_store::model::Profession;
use atelier_store::queries::search_by_profession;

use crate::artisans::choices::ProfessionChoice;
use crate::artisans::embeds::{guild_only_message, search_embed};
use crate::artisans::say_ephemeral;

/// Trouve les artisans d'un métier à partir d'un niveau donné
#[poise::command(slash_command, category = "Artisans")]
pub async fn recherche(
    ctx: Context<'_>,
    #[description = "Le métier recherché"] metier: ProfessionChoice,
    #[description = "Niveau minimum (défaut : 1)"]
    #[min = 0]
    #[max = 200]
    niveau_min: Option<u16>,
) -> Result<(), Error> {
    if ctx.guild_id().is_none() {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let profession = Profession::from(metier);
    let min_level = niveau_min.unwrap_or(1);

    let profiles = ctx.data().store.snapshot().await?;

    let hits = {
        let Some(guild) = ctx.guild() else {
            say_ephemeral(
                &ctx,
                format!("😕 Aucun artisan **{profession}** de niveau {min_level} ou plus."),
            )
            .await?;
            return Ok(());
        };
        search_by_profession(&profiles, profession, min_level, |user_id| {
            guild
                .members
                .get(&serenity::UserId::new(user_id))
                .map(|member| member.display_name().to_owned())
        })
    };

    if hits.is_empty() {
        say_ephemeral(
            &ctx,
            format!("😕 Aucun artisan **{profession}** de niveau {min_level} ou plus."),
        )
        .await?;
        return Ok(());
    }

    let embed = search_embed(profession, min_level, &hits);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
