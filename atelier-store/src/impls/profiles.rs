use tracing::info;

use crate::model::{Level, Profession, ProfessionLevels};
use crate::store::{ProfileStore, StoreError};

/// Register or update one profession level for a member, creating their
/// record when absent. Returns the level that was replaced, if any.
pub async fn set_level(
    store: &ProfileStore,
    user_id: u64,
    profession: Profession,
    level: Level,
) -> Result<Option<Level>, StoreError> {
    let previous = store
        .mutate(|profiles| profiles.set(user_id, profession, level))
        .await?;

    info!(user_id, %profession, %level, "profession level saved");
    Ok(previous)
}

/// Remove one profession from a member, pruning their record when it was the
/// last one. Returns whether the profession was actually registered.
pub async fn remove_level(
    store: &ProfileStore,
    user_id: u64,
    profession: Profession,
) -> Result<bool, StoreError> {
    let removed = store
        .mutate(|profiles| profiles.remove(user_id, profession))
        .await?;

    if removed {
        info!(user_id, %profession, "profession removed");
    }
    Ok(removed)
}

/// Look up one member's registered professions, `None` when they have none.
pub async fn profile_of(
    store: &ProfileStore,
    user_id: u64,
) -> Result<Option<ProfessionLevels>, StoreError> {
    let profiles = store.snapshot().await?;
    Ok(profiles.get(user_id).cloned())
}
