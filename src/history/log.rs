//! In-memory move log.
//!
//! Backed by `im::Vector`, so cloning the log to hand it to a UI or a
//! persistence task is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{HistoryError, Player};

use super::record::MoveRecord;

/// Ordered moves of one game, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vector<MoveRecord>,
    limit: Option<usize>,
}

impl MoveLog {
    /// Create an unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log keeping at most `limit` records.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            records: Vector::new(),
            limit,
        }
    }

    /// Append a record, dropping the oldest past the limit.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    /// Moves made by `player`.
    pub fn by_player(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(move |r| r.player == player)
    }

    /// Moves that captured a piece.
    pub fn captures(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(|r| r.captured.is_some())
    }

    /// Pieces `player` has borne off according to the retained records.
    #[must_use]
    pub fn borne_off(&self, player: Player) -> usize {
        self.by_player(player).filter(|r| r.is_bear_off()).count()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HistoryError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a log written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HistoryError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a MoveRecord;
    type IntoIter = im::vector::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Destination, HouseEffect};

    fn record(number: u32, player: Player, landing: Destination, captured: bool) -> MoveRecord {
        MoveRecord {
            number,
            player,
            origin: 3,
            dice: 2,
            landing,
            resting: landing.cell(),
            captured: captured.then_some(3),
            house_effect: HouseEffect::None,
        }
    }

    #[test]
    fn test_push_and_query() {
        let mut log = MoveLog::new();
        log.push(record(1, Player::Light, Destination::Cell(5), false));
        log.push(record(2, Player::Dark, Destination::Cell(5), true));
        log.push(record(3, Player::Light, Destination::BorneOff, false));

        assert_eq!(log.len(), 3);
        assert_eq!(log.last().map(|r| r.number), Some(3));
        assert_eq!(log.by_player(Player::Light).count(), 2);
        assert_eq!(log.captures().count(), 1);
        assert_eq!(log.borne_off(Player::Light), 1);
        assert_eq!(log.borne_off(Player::Dark), 0);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut log = MoveLog::with_limit(Some(2));
        for n in 1..=5 {
            log.push(record(n, Player::Light, Destination::Cell(4), false));
        }

        let numbers: Vec<_> = log.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![4, 5]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = MoveLog::new();
        log.push(record(1, Player::Light, Destination::Cell(4), false));

        let snapshot = log.clone();
        log.push(record(2, Player::Dark, Destination::Cell(8), false));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut log = MoveLog::with_limit(Some(10));
        log.push(record(1, Player::Dark, Destination::BorneOff, false));

        let bytes = log.to_bytes().unwrap();
        assert_eq!(MoveLog::from_bytes(&bytes).unwrap(), log);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(MoveLog::from_bytes(&[0xff]).is_err());
    }
}
