use poise::serenity_prelude as serenity;
use tracing::{info, warn};

use atelier_core::Context;
use atelier_store::model::Profession;

/// Whether the role side effect went through. The level is already persisted
/// either way; a refusal only changes the wording of the reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleOutcome {
    Applied,
    NotApplied,
}

/// Make sure a mentionable role named after the profession exists and is on
/// the invoker. Best-effort: any refusal is logged and reported, never
/// propagated.
pub async fn attach_profession_role(
    ctx: &Context<'_>,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    profession: Profession,
) -> RoleOutcome {
    let role_id = match find_or_create_role(ctx.http(), guild_id, profession).await {
        Ok(role_id) => role_id,
        Err(error) => {
            warn_role_failure(&error, profession, "create");
            return RoleOutcome::NotApplied;
        }
    };

    match ctx
        .http()
        .add_member_role(guild_id, user_id, role_id, Some("Niveau de métier enregistré"))
        .await
    {
        Ok(()) => {
            info!(user_id = user_id.get(), %profession, "profession role attached");
            RoleOutcome::Applied
        }
        Err(error) => {
            warn_role_failure(&error, profession, "attach");
            RoleOutcome::NotApplied
        }
    }
}

/// Take the profession role off the invoker. A missing role means there is
/// nothing to detach.
pub async fn detach_profession_role(
    ctx: &Context<'_>,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    profession: Profession,
) -> RoleOutcome {
    let role_id = match find_role(ctx.http(), guild_id, profession).await {
        Ok(Some(role_id)) => role_id,
        Ok(None) => return RoleOutcome::Applied,
        Err(error) => {
            warn_role_failure(&error, profession, "look up");
            return RoleOutcome::NotApplied;
        }
    };

    match ctx
        .http()
        .remove_member_role(guild_id, user_id, role_id, Some("Métier retiré du profil"))
        .await
    {
        Ok(()) => {
            info!(user_id = user_id.get(), %profession, "profession role detached");
            RoleOutcome::Applied
        }
        Err(error) => {
            warn_role_failure(&error, profession, "detach");
            RoleOutcome::NotApplied
        }
    }
}

async fn find_role(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    profession: Profession,
) -> Result<Option<serenity::RoleId>, serenity::Error> {
    let roles = guild_id.roles(http).await?;
    Ok(roles
        .values()
        .find(|role| role.name == profession.name())
        .map(|role| role.id))
}

async fn find_or_create_role(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    profession: Profession,
) -> Result<serenity::RoleId, serenity::Error> {
    if let Some(role_id) = find_role(http, guild_id, profession).await? {
        return Ok(role_id);
    }

    let role = guild_id
        .create_role(
            http,
            serenity::EditRole::new()
                .name(profession.name())
                .mentionable(true),
        )
        .await?;
    info!(%profession, "profession role created");
    Ok(role.id)
}

fn warn_role_failure(error: &serenity::Error, profession: Profession, action: &str) {
    if is_missing_permissions_error(error) {
        warn!(%profession, action, "missing permissions for profession role");
    } else {
        warn!(%profession, action, %error, "profession role side effect failed");
    }
}

fn is_missing_permissions_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}
