//! The player's pet party: a fixed number of slots, any of which may
//! be empty.

use crate::config::GameConfig;
use crate::pet::{Pet, PetError};

/// Fixed party slots. Encounter rosters are sized to the number of
/// occupied slots, and enemy levels scale with the party's truncated
/// average level.
#[derive(Debug, Default)]
pub struct Party {
    slots: [Option<Pet>; GameConfig::MAX_PARTY_SLOTS],
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a party from the given pets, filling slots front to back.
    /// Pets beyond the slot count are dropped.
    pub fn of(pets: impl IntoIterator<Item = Pet>) -> Self {
        let mut party = Self::new();
        for (slot, pet) in pets.into_iter().take(GameConfig::MAX_PARTY_SLOTS).enumerate() {
            party.slots[slot] = Some(pet);
        }
        party
    }

    pub fn slot(&self, index: usize) -> Option<&Pet> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Pet> {
        self.slots.get_mut(index).and_then(|s| s.as_mut())
    }

    /// Places a pet in a slot, returning whatever occupied it before.
    /// Fails when the index is outside the fixed slot range.
    pub fn place(&mut self, index: usize, pet: Pet) -> Result<Option<Pet>, PetError> {
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.replace(pet)),
            None => Err(PetError::SlotOutOfRange(index)),
        }
    }

    /// Empties a slot.
    pub fn remove(&mut self, index: usize) -> Option<Pet> {
        self.slots.get_mut(index).and_then(|s| s.take())
    }

    /// Iterates occupied slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Pet> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    /// Truncated mean level over occupied slots; 0 for an empty party.
    pub fn average_level(&self) -> u32 {
        let occupied = self.occupied() as u32;
        if occupied == 0 {
            return 0;
        }
        self.iter().map(Pet::level).sum::<u32>() / occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::test_support::starter_pet;

    #[test]
    fn average_level_truncates_over_occupied_slots() {
        let mut a = starter_pet("A");
        let mut b = starter_pet("B");
        a.level_up_times(4).unwrap(); // level 5
        b.level_up_times(1).unwrap(); // level 2

        let party = Party::of([a, b]);
        assert_eq!(party.occupied(), 2);
        assert_eq!(party.average_level(), 3); // (5 + 2) / 2, truncated
    }

    #[test]
    fn place_checks_the_slot_range() {
        let mut party = Party::new();
        assert!(party.place(0, starter_pet("A")).unwrap().is_none());
        assert!(party.place(0, starter_pet("B")).unwrap().is_some());

        let err = party
            .place(GameConfig::MAX_PARTY_SLOTS, starter_pet("C"))
            .unwrap_err();
        assert_eq!(err, PetError::SlotOutOfRange(GameConfig::MAX_PARTY_SLOTS));
        assert_eq!(party.occupied(), 1);
    }

    #[test]
    fn empty_party_reports_zero_average() {
        let party = Party::new();
        assert!(party.is_empty());
        assert_eq!(party.average_level(), 0);
    }
}
