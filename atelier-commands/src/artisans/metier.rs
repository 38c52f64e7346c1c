use atelier_core::{Context, Error};
use atelier_store::impls::profiles::{remove_level, set_level};
use atelier_store::model::{Level, Profession};

use crate::artisans::choices::ProfessionChoice;
use crate::artisans::embeds::{guild_only_message, invalid_level_message};
use crate::artisans::roles::{RoleOutcome, attach_profession_role, detach_profession_role};
use crate::artisans::say_ephemeral;

/// Met à jour ton niveau de métier (ex: /metier Paysan 200)
#[poise::command(slash_command, category = "Artisans")]
pub async fn metier(
    ctx: Context<'_>,
    #[description = "Choisis le métier"] metier: ProfessionChoice,
    #[description = "Ton niveau (1-200, 0 pour retirer)"]
    #[min = 0]
    #[max = 200]
    niveau: u16,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    // Discord already bounds the option, but the range check stays here so
    // the store can never see an out-of-range value.
    if niveau > Level::MAX.get() {
        say_ephemeral(&ctx, invalid_level_message().to_owned()).await?;
        return Ok(());
    }

    let profession = Profession::from(metier);
    let user_id = ctx.author().id;

    let Some(level) = Level::new(niveau) else {
        // Zero is the removal sentinel.
        let removed = remove_level(&ctx.data().store, user_id.get(), profession).await?;
        if !removed {
            say_ephemeral(
                &ctx,
                format!("😕 Tu n'avais pas enregistré **{profession}**."),
            )
            .await?;
            return Ok(());
        }

        detach_profession_role(&ctx, guild_id, user_id, profession).await;
        say_ephemeral(&ctx, format!("✅ **{profession}** retiré de ton profil.")).await?;
        return Ok(());
    };

    // The level is saved first; the role is best-effort on top of it.
    set_level(&ctx.data().store, user_id.get(), profession, level).await?;

    let reply = match attach_profession_role(&ctx, guild_id, user_id, profession).await {
        RoleOutcome::Applied => format!(
            "✅ **{profession}** mis à jour au niveau **{niveau}** ! Tu as reçu le rôle correspondant."
        ),
        RoleOutcome::NotApplied => format!(
            "✅ **{profession}** mis à jour au niveau **{niveau}** ! ⚠️ (rôle non appliqué : permissions insuffisantes)"
        ),
    };
    say_ephemeral(&ctx, reply).await?;

    Ok(())
}
