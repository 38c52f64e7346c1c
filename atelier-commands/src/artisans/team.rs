use poise::serenity_prelude as serenity;

use atelier_core::{Context, Error};
use atelier_store::queries::{TeamRoster, team_roster};

use crate::artisans::embeds::{guild_only_message, team_embed};
use crate::artisans::say_ephemeral;

/// Affiche les métiers de toute l'équipe
#[poise::command(slash_command, category = "Artisans")]
pub async fn team(ctx: Context<'_>) -> Result<(), Error> {
    if ctx.guild_id().is_none() {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    let profiles = ctx.data().store.snapshot().await?;

    // Les membres partis du serveur sont écartés sans bruit.
    let roster = {
        let Some(guild) = ctx.guild() else {
            say_ephemeral(&ctx, "❌ Aucun artisan trouvé sur le serveur.".to_owned()).await?;
            return Ok(());
        };
        team_roster(&profiles, |user_id| {
            guild
                .members
                .get(&serenity::UserId::new(user_id))
                .map(|member| member.display_name().to_owned())
        })
    };

    match roster {
        TeamRoster::NoDataAtAll => {
            say_ephemeral(&ctx, "❌ Personne n'a encore enregistré de métier.".to_owned()).await?;
        }
        TeamRoster::NoResolvedMembers => {
            say_ephemeral(&ctx, "❌ Aucun artisan trouvé sur le serveur.".to_owned()).await?;
        }
        TeamRoster::Members(entries) => {
            ctx.send(poise::CreateReply::default().embed(team_embed(&entries)))
                .await?;
        }
    }

    Ok(())
}
