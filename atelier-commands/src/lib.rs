pub mod artisans;

use atelier_core::{Data, Error};

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        artisans::metier::metier(),
        artisans::profil::profil(),
        artisans::team::team(),
        artisans::recherche::recherche(),
    ]
}
