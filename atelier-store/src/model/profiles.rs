use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Level, Profession};

/// One member's registered professions, in the order they were first
/// registered. Never persisted empty: the document prunes a member whose
/// last profession is removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionLevels(IndexMap<Profession, Level>);

impl ProfessionLevels {
    pub fn get(&self, profession: Profession) -> Option<Level> {
        self.0.get(&profession).copied()
    }

    /// Insert or overwrite, returning the previous level if any.
    pub fn set(&mut self, profession: Profession, level: Level) -> Option<Level> {
        self.0.insert(profession, level)
    }

    /// Remove a profession, keeping the registration order of the rest.
    pub fn remove(&mut self, profession: Profession) -> Option<Level> {
        self.0.shift_remove(&profession)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Profession, Level)> + '_ {
        self.0.iter().map(|(profession, level)| (*profession, *level))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The whole persisted roster: member id → professions.
///
/// Document keys keep their stored order, so iteration is stable across
/// load/save cycles and sort ties stay where registration put them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(IndexMap<u64, ProfessionLevels>);

impl Profiles {
    pub fn get(&self, user_id: u64) -> Option<&ProfessionLevels> {
        self.0.get(&user_id)
    }

    /// Insert or overwrite one profession level, creating the member's
    /// record when absent. Returns the previous level if any.
    pub fn set(&mut self, user_id: u64, profession: Profession, level: Level) -> Option<Level> {
        self.0
            .entry(user_id)
            .or_insert_with(ProfessionLevels::default)
            .set(profession, level)
    }

    /// Remove one profession from a member, deleting the member entirely
    /// when nothing remains. Returns whether a removal occurred.
    pub fn remove(&mut self, user_id: u64, profession: Profession) -> bool {
        let Some(levels) = self.0.get_mut(&user_id) else {
            return false;
        };

        let removed = levels.remove(profession).is_some();
        if levels.is_empty() {
            self.0.shift_remove(&user_id);
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &ProfessionLevels)> + '_ {
        self.0.iter().map(|(user_id, levels)| (*user_id, levels))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Profession, Profiles};
    use crate::model::Level;

    fn level(value: u16) -> Level {
        Level::new(value).unwrap()
    }

    #[test]
    fn set_creates_the_member_record() {
        let mut profiles = Profiles::default();
        assert!(profiles.get(1).is_none());

        profiles.set(1, Profession::Paysan, level(12));

        let record = profiles.get(1).unwrap();
        assert_eq!(record.get(Profession::Paysan), Some(level(12)));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn set_overwrites_and_returns_the_previous_level() {
        let mut profiles = Profiles::default();
        assert_eq!(profiles.set(1, Profession::Forgeron, level(50)), None);
        assert_eq!(
            profiles.set(1, Profession::Forgeron, level(120)),
            Some(level(50))
        );
        assert_eq!(
            profiles.get(1).unwrap().get(Profession::Forgeron),
            Some(level(120))
        );
    }

    #[test]
    fn removing_a_profession_keeps_the_rest() {
        let mut profiles = Profiles::default();
        profiles.set(1, Profession::Paysan, level(200));
        profiles.set(1, Profession::Mineur, level(50));

        assert!(profiles.remove(1, Profession::Mineur));

        let record = profiles.get(1).unwrap();
        assert_eq!(record.get(Profession::Paysan), Some(level(200)));
        assert_eq!(record.get(Profession::Mineur), None);
    }

    #[test]
    fn removing_the_last_profession_deletes_the_member() {
        let mut profiles = Profiles::default();
        profiles.set(1, Profession::Paysan, level(200));
        profiles.set(1, Profession::Mineur, level(50));

        assert!(profiles.remove(1, Profession::Mineur));
        assert!(profiles.remove(1, Profession::Paysan));

        assert!(profiles.get(1).is_none());
        assert!(profiles.is_empty());
    }

    #[test]
    fn removing_an_unregistered_profession_changes_nothing() {
        let mut profiles = Profiles::default();
        profiles.set(1, Profession::Paysan, level(10));

        assert!(!profiles.remove(1, Profession::Tailleur));
        assert!(!profiles.remove(7, Profession::Paysan));

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles.get(1).unwrap().len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut profiles = Profiles::default();
        profiles.set(30, Profession::Paysan, level(1));
        profiles.set(10, Profession::Paysan, level(1));
        profiles.set(20, Profession::Paysan, level(1));

        let ids: Vec<u64> = profiles.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![30, 10, 20]);

        profiles.set(10, Profession::Mineur, level(2));
        let ids: Vec<u64> = profiles.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![30, 10, 20], "updates must not reorder members");
    }

    #[test]
    fn removal_preserves_the_order_of_remaining_members() {
        let mut profiles = Profiles::default();
        profiles.set(1, Profession::Paysan, level(1));
        profiles.set(2, Profession::Paysan, level(1));
        profiles.set(3, Profession::Paysan, level(1));

        assert!(profiles.remove(2, Profession::Paysan));

        let ids: Vec<u64> = profiles.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn document_shape_uses_stringified_ids_and_profession_names() {
        let mut profiles = Profiles::default();
        profiles.set(123456, Profession::Bucheron, level(88));

        let raw = serde_json::to_string(&profiles).unwrap();
        assert_eq!(raw, r#"{"123456":{"Bûcheron":88}}"#);

        let reloaded: Profiles = serde_json::from_str(&raw).unwrap();
        assert_eq!(reloaded, profiles);
    }
}
