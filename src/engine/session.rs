use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::availability::{classify, Reservation, SelectionSet, SlotKey, SlotStatus};
use crate::engine::pricing::{self, PriceQuote, PricingError};
use crate::models::voucher::VoucherKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session already submitted")]
    Closed,

    #[error("select at least one slot first")]
    NothingSelected,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Where the booking flow currently stands. Derived from the session fields,
/// not stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Selecting,
    Discounted,
    Submitted,
}

/// One user's booking flow for one court. Owns the selection set and the
/// reservation snapshot for the court being viewed; replaces the old
/// process-wide booking map so nothing leaks across sessions.
#[derive(Debug)]
pub struct BookingSession {
    pub id: Uuid,
    pub court_id: Uuid,
    pub user_id: Uuid,
    pub sport: String,
    selection: SelectionSet,
    voucher: Option<(String, VoucherKind)>,
    reservations: Vec<Reservation>,
    generation: u64,
    submitted: bool,
}

impl BookingSession {
    pub fn new(court_id: Uuid, user_id: Uuid, sport: String) -> BookingSession {
        BookingSession {
            id: Uuid::new_v4(),
            court_id,
            user_id,
            sport,
            selection: SelectionSet::new(),
            voucher: None,
            reservations: Vec::new(),
            generation: 0,
            submitted: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.submitted {
            SessionState::Submitted
        } else if self.selection.is_empty() {
            SessionState::Idle
        } else if self.voucher.is_some() {
            SessionState::Discounted
        } else {
            SessionState::Selecting
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn voucher_code(&self) -> Option<&str> {
        self.voucher.as_ref().map(|(code, _)| code.as_str())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bump the snapshot generation before fetching. Any snapshot installed
    /// with an older generation is late and gets discarded.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Install a reservation snapshot. Returns false when the snapshot is
    /// stale (a newer refresh started after this fetch did).
    pub fn install_snapshot(&mut self, generation: u64, reservations: Vec<Reservation>) -> bool {
        if generation < self.generation {
            tracing::debug!(
                session = %self.id,
                generation,
                current = self.generation,
                "discarding stale reservation snapshot"
            );
            return false;
        }
        self.reservations = reservations;
        true
    }

    pub fn classify(&self, key: &SlotKey) -> SlotStatus {
        classify(key, &self.reservations, &self.selection)
    }

    /// Toggle a slot selection. No-op on booked slots, error after submit.
    pub fn toggle(&mut self, key: SlotKey) -> Result<bool, SessionError> {
        self.ensure_open()?;
        Ok(self.selection.toggle(key, &self.reservations))
    }

    /// Apply the single voucher the user's tier is eligible for. Strict
    /// toggle, no stacking; requires something to be selected.
    pub fn apply_voucher(&mut self, code: String, kind: VoucherKind) -> Result<(), SessionError> {
        self.ensure_open()?;
        if self.selection.is_empty() {
            return Err(SessionError::NothingSelected);
        }
        self.voucher = Some((code, kind));
        Ok(())
    }

    pub fn remove_voucher(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.voucher = None;
        Ok(())
    }

    pub fn quote(&self) -> Result<PriceQuote, SessionError> {
        let voucher = self.voucher.as_ref().map(|(code, kind)| (code.as_str(), kind));
        Ok(pricing::quote(&self.sport, self.selection.len() as u32, voucher)?)
    }

    /// Close the session for submission, handing the selected keys to the
    /// caller. Irreversible within this session.
    pub fn submit(&mut self) -> Result<Vec<SlotKey>, SessionError> {
        self.ensure_open()?;
        if self.selection.is_empty() {
            return Err(SessionError::NothingSelected);
        }
        let keys: Vec<SlotKey> = self.selection.iter().cloned().collect();
        self.selection.clear();
        self.submitted = true;
        Ok(keys)
    }

    /// Cancel: drop all selections and the voucher, back to Idle.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.voucher = None;
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.submitted {
            Err(SessionError::Closed)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::{date, datetime};

    fn session() -> BookingSession {
        BookingSession::new(Uuid::new_v4(), Uuid::new_v4(), "badminton".to_string())
    }

    fn key(start: &str) -> SlotKey {
        SlotKey::new(date!(2025 - 06 - 29), start)
    }

    #[test]
    fn walks_the_state_machine() {
        let mut s = session();
        assert_eq!(s.state(), SessionState::Idle);

        s.toggle(key("09:00")).unwrap();
        assert_eq!(s.state(), SessionState::Selecting);

        s.apply_voucher("RM10".to_string(), VoucherKind::Flat(dec!(10))).unwrap();
        assert_eq!(s.state(), SessionState::Discounted);

        s.remove_voucher().unwrap();
        assert_eq!(s.state(), SessionState::Selecting);

        let keys = s.submit().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(s.state(), SessionState::Submitted);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn submitted_session_rejects_further_mutation() {
        let mut s = session();
        s.toggle(key("09:00")).unwrap();
        s.submit().unwrap();

        assert_eq!(s.toggle(key("10:00")), Err(SessionError::Closed));
        assert_eq!(s.submit().unwrap_err(), SessionError::Closed);
        assert_eq!(
            s.apply_voucher("RM10".to_string(), VoucherKind::Flat(dec!(10))),
            Err(SessionError::Closed)
        );
    }

    #[test]
    fn voucher_needs_a_selection() {
        let mut s = session();
        assert_eq!(
            s.apply_voucher("RM10".to_string(), VoucherKind::Flat(dec!(10))),
            Err(SessionError::NothingSelected)
        );
    }

    #[test]
    fn submit_needs_a_selection() {
        let mut s = session();
        assert_eq!(s.submit().unwrap_err(), SessionError::NothingSelected);
    }

    #[test]
    fn stale_snapshot_is_discarded() {
        let mut s = session();
        let first = s.begin_refresh();
        let second = s.begin_refresh();

        //late response from the first fetch loses
        assert!(!s.install_snapshot(
            first,
            vec![Reservation {
                start_time: datetime!(2025 - 06 - 29 10:00 UTC),
            }],
        ));
        assert_eq!(s.classify(&key("10:00")), SlotStatus::Available);

        assert!(s.install_snapshot(
            second,
            vec![Reservation {
                start_time: datetime!(2025 - 06 - 29 10:00 UTC),
            }],
        ));
        assert_eq!(s.classify(&key("10:00")), SlotStatus::Booked);
    }

    #[test]
    fn select_then_deselect_everything_quotes_zero() {
        let mut s = session();
        let starts = ["08:00", "09:00", "10:00"];
        for start in starts {
            s.toggle(key(start)).unwrap();
        }
        for start in starts {
            s.toggle(key(start)).unwrap();
        }
        assert!(s.selection().is_empty());
        assert_eq!(s.state(), SessionState::Idle);

        let q = s.quote().unwrap();
        assert_eq!(q.subtotal, dec!(0));
        assert_eq!(q.total, dec!(0));
    }

    //the walkthrough from the booking page: badminton court, 10:00 already
    //booked, user picks 09:00 and 11:00, tier voucher RM15
    #[test]
    fn badminton_walkthrough() {
        let mut s = session();
        let generation = s.begin_refresh();
        s.install_snapshot(
            generation,
            vec![Reservation {
                start_time: datetime!(2025 - 06 - 29 10:00 UTC),
            }],
        );

        s.toggle(key("09:00")).unwrap();
        s.toggle(key("11:00")).unwrap();

        assert_eq!(s.classify(&key("09:00")), SlotStatus::Selected);
        assert_eq!(s.classify(&key("10:00")), SlotStatus::Booked);
        assert_eq!(s.classify(&key("12:00")), SlotStatus::Available);

        let q = s.quote().unwrap();
        assert_eq!(q.subtotal, dec!(50));
        assert_eq!(q.total, dec!(50));

        s.apply_voucher("RM15".to_string(), VoucherKind::Flat(dec!(15))).unwrap();
        let q = s.quote().unwrap();
        assert_eq!(q.discount, dec!(15));
        assert_eq!(q.total, dec!(35));
    }
}
