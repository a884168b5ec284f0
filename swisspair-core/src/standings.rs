/// The mutable per-competitor record set.
///
/// Owned by the tournament driver for the length of one run and threaded by
/// reference into every other component. The pairing engine writes `played`
/// sets, the reconciler writes scores; entries are never removed.
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::types::{Competitor, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standings {
    players: BTreeMap<PlayerId, Competitor>,
}

impl Standings {
    /// Build from pre-registered competitors. Panics on a duplicate ID;
    /// registration assigns IDs sequentially, so a duplicate is caller error.
    pub fn from_competitors(competitors: impl IntoIterator<Item = Competitor>) -> Self {
        let mut players = BTreeMap::new();
        for competitor in competitors {
            let prev = players.insert(competitor.id, competitor);
            assert!(prev.is_none(), "duplicate competitor ID");
        }
        Standings { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// All IDs in ascending order.
    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.keys().copied().collect()
    }

    pub fn get(&self, id: PlayerId) -> &Competitor {
        self.players
            .get(&id)
            .unwrap_or_else(|| panic!("unknown competitor ID: {id}"))
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Competitor {
        self.players
            .get_mut(&id)
            .unwrap_or_else(|| panic!("unknown competitor ID: {id}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Competitor> {
        self.players.values()
    }

    /// Competitors ranked by points descending, ID ascending among ties.
    pub fn ranked(&self) -> Vec<&Competitor> {
        let mut ranked: Vec<&Competitor> = self.players.values().collect();
        // 2*wins + draws orders the same way as points() without touching
        // floats; the stable sort keeps the ascending-ID iteration order
        // for ties.
        ranked.sort_by_key(|c| Reverse(2 * c.wins + c.draws));
        ranked
    }
}
