pub mod impls;
pub mod model;
pub mod queries;
pub mod store;

pub use store::{ProfileStore, StoreError};
