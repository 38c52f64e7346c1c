use atelier_store::ProfileStore;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub store: ProfileStore,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
