//! Read-side queries over a roster snapshot.
//!
//! Everything here is pure and synchronous: callers take one
//! [`ProfileStore::snapshot`](crate::ProfileStore::snapshot) and run the
//! query against it. Identity resolution is injected as a closure so this
//! crate never touches the chat platform; a member that fails to resolve
//! (left the server) is dropped silently.

use crate::model::{Level, Profession, ProfessionLevels, Profiles};

/// One resolved member of the team roster, professions already sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub display_name: String,
    pub professions: Vec<(Profession, Level)>,
}

/// Outcome of a whole-roster query. An empty store and a store whose members
/// all left are different situations for the caller to phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamRoster {
    NoDataAtAll,
    NoResolvedMembers,
    Members(Vec<RosterEntry>),
}

/// One search hit: a resolved member holding the searched profession.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub display_name: String,
    pub level: Level,
}

/// A member's professions, highest level first. The sort is stable: equal
/// levels keep the order the professions were registered in.
pub fn sorted_profile(levels: &ProfessionLevels) -> Vec<(Profession, Level)> {
    let mut entries: Vec<(Profession, Level)> = levels.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// The whole roster in document order, restricted to members the resolver
/// still knows.
pub fn team_roster(
    profiles: &Profiles,
    mut resolver: impl FnMut(u64) -> Option<String>,
) -> TeamRoster {
    if profiles.is_empty() {
        return TeamRoster::NoDataAtAll;
    }

    let entries: Vec<RosterEntry> = profiles
        .iter()
        .filter_map(|(user_id, levels)| {
            resolver(user_id).map(|display_name| RosterEntry {
                display_name,
                professions: sorted_profile(levels),
            })
        })
        .collect();

    if entries.is_empty() {
        TeamRoster::NoResolvedMembers
    } else {
        TeamRoster::Members(entries)
    }
}

/// Resolved members holding `profession` at `min_level` or above, highest
/// level first; equal levels keep document order.
pub fn search_by_profession(
    profiles: &Profiles,
    profession: Profession,
    min_level: u16,
    mut resolver: impl FnMut(u64) -> Option<String>,
) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = profiles
        .iter()
        .filter_map(|(user_id, levels)| {
            let level = levels.get(profession).filter(|level| level.get() >= min_level)?;
            resolver(user_id).map(|display_name| SearchHit {
                display_name,
                level,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.level.cmp(&a.level));
    hits
}
