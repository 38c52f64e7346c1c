use poise::serenity_prelude as serenity;

use atelier_store::model::{Level, Profession};
use atelier_store::queries::{RosterEntry, SearchHit};

pub const PROFILE_EMBED_COLOR: u32 = 0x00FF00;
pub const TEAM_EMBED_COLOR: u32 = 0xFFA500;
pub const SEARCH_EMBED_COLOR: u32 = 0x3498DB;
pub const ERROR_EMBED_COLOR: u32 = 0xED4245;

/// Star for a maxed profession, diamond otherwise.
fn level_icon(level: Level) -> &'static str {
    if level.is_maxed() { "⭐" } else { "🔹" }
}

pub fn guild_only_message() -> &'static str {
    "❌ Cette commande ne fonctionne que sur un serveur."
}

pub fn invalid_level_message() -> &'static str {
    "❌ Le niveau doit être compris entre 0 et 200 (0 pour retirer le métier)."
}

pub fn profile_embed(
    display_name: &str,
    avatar_url: &str,
    professions: &[(Profession, Level)],
) -> serenity::CreateEmbed {
    let description: String = professions
        .iter()
        .map(|&(profession, level)| {
            format!(
                "{} **{}** : Niv. {}\n",
                level_icon(level),
                profession,
                level
            )
        })
        .collect();

    serenity::CreateEmbed::new()
        .title(format!("🛠️ Livre des artisans : {display_name}"))
        .color(PROFILE_EMBED_COLOR)
        .thumbnail(avatar_url)
        .description(description)
}

pub fn team_embed(entries: &[RosterEntry]) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title("🛡️ L'équipe des Artisans")
        .description("Voici les compétences du groupe :")
        .color(TEAM_EMBED_COLOR);

    for entry in entries {
        let value: String = entry
            .professions
            .iter()
            .map(|&(profession, level)| {
                format!("{} **{}** : {}\n", level_icon(level), profession, level)
            })
            .collect();

        embed = embed.field(format!("👤 {}", entry.display_name), value, true);
    }

    embed
}

pub fn search_embed(profession: Profession, min_level: u16, hits: &[SearchHit]) -> serenity::CreateEmbed {
    let description: String = hits
        .iter()
        .map(|hit| {
            format!(
                "{} **{}** : Niv. {}\n",
                level_icon(hit.level),
                hit.display_name,
                hit.level
            )
        })
        .collect();

    serenity::CreateEmbed::new()
        .title(format!("🔎 Artisans {profession} (Niv. {min_level}+)"))
        .color(SEARCH_EMBED_COLOR)
        .description(description)
}
