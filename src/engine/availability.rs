use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Candidate (date, slot-start) key the user can select.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub date: Date,
    pub start: String,
}

impl SlotKey {
    pub fn new(date: Date, start: impl Into<String>) -> SlotKey {
        SlotKey {
            date,
            start: start.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Booked,
    Selected,
    Available,
}

/// One row of the reservation snapshot fetched from the booking store.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub start_time: OffsetDateTime,
}

fn matches_reservation(key: &SlotKey, reservation: &Reservation) -> bool {
    let start = reservation.start_time;
    start.date() == key.date
        && format!("{:02}:{:02}", start.hour(), start.minute()) == key.start
}

/// Booked wins over Selected: a slot the user picked that someone else booked
/// in the meantime shows up Booked after the next snapshot refresh.
pub fn classify(key: &SlotKey, reservations: &[Reservation], selection: &SelectionSet) -> SlotStatus {
    if reservations.iter().any(|r| matches_reservation(key, r)) {
        SlotStatus::Booked
    } else if selection.contains(key) {
        SlotStatus::Selected
    } else {
        SlotStatus::Available
    }
}

/// The set of slots the user has marked in the current session. Owned by one
/// session, never shared; cleared on submit or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSet(BTreeSet<SlotKey>);

impl SelectionSet {
    pub fn new() -> SelectionSet {
        SelectionSet::default()
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotKey> {
        self.0.iter()
    }

    /// Flip membership of `key`. Booked slots are never toggleable, the call
    /// is a silent no-op for them. Returns whether the key is selected after
    /// the call.
    pub fn toggle(&mut self, key: SlotKey, reservations: &[Reservation]) -> bool {
        if classify(&key, reservations, self) == SlotStatus::Booked {
            return false;
        }
        if self.0.remove(&key) {
            false
        } else {
            self.0.insert(key);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn booked_at(dt: OffsetDateTime) -> Vec<Reservation> {
        vec![Reservation { start_time: dt }]
    }

    #[test]
    fn booked_takes_precedence_over_selected() {
        let key = SlotKey::new(date!(2025 - 06 - 29), "10:00");
        let reservations = booked_at(datetime!(2025 - 06 - 29 10:00 UTC));
        let mut selection = SelectionSet::new();
        selection.0.insert(key.clone());

        assert_eq!(classify(&key, &reservations, &selection), SlotStatus::Booked);
    }

    #[test]
    fn reservation_on_other_day_does_not_block() {
        let key = SlotKey::new(date!(2025 - 06 - 29), "10:00");
        let reservations = booked_at(datetime!(2025 - 06 - 30 10:00 UTC));
        assert_eq!(
            classify(&key, &reservations, &SelectionSet::new()),
            SlotStatus::Available
        );
    }

    #[test]
    fn off_hour_reservation_does_not_match_slot() {
        //comparison truncates to HH:MM, so 10:30 never matches the 10:00 slot
        let key = SlotKey::new(date!(2025 - 06 - 29), "10:00");
        let reservations = booked_at(datetime!(2025 - 06 - 29 10:30 UTC));
        assert_eq!(
            classify(&key, &reservations, &SelectionSet::new()),
            SlotStatus::Available
        );
    }

    #[test]
    fn toggle_is_an_involution_on_free_slots() {
        let key = SlotKey::new(date!(2025 - 06 - 29), "09:00");
        let mut selection = SelectionSet::new();

        assert!(selection.toggle(key.clone(), &[]));
        assert_eq!(classify(&key, &[], &selection), SlotStatus::Selected);
        assert!(!selection.toggle(key.clone(), &[]));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_is_a_noop_on_booked_slots() {
        let key = SlotKey::new(date!(2025 - 06 - 29), "10:00");
        let reservations = booked_at(datetime!(2025 - 06 - 29 10:00 UTC));
        let mut selection = SelectionSet::new();
        let before = selection.clone();

        assert!(!selection.toggle(key, &reservations));
        assert_eq!(selection, before);
    }
}
