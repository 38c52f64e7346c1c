pub mod choices;
pub mod embeds;
pub mod metier;
pub mod profil;
pub mod recherche;
pub mod roles;
pub mod team;

use atelier_core::{Context, Error};

pub(crate) async fn say_ephemeral(ctx: &Context<'_>, content: String) -> Result<(), Error> {
    ctx.send(poise::CreateReply::default().ephemeral(true).content(content))
        .await?;
    Ok(())
}
