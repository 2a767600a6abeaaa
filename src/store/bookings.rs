use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::engine::availability::Reservation;
use crate::models::booking::{Booking, BookingStatus};
use crate::store::StoreError;

#[derive(Clone, Default)]
pub struct BookingStore {
    inner: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl BookingStore {
    /// Create a booking for a slot. Rejects the slot when it overlaps any
    /// non-rejected booking on the same court.
    pub async fn create(
        &self,
        court_id: Uuid,
        user_id: Uuid,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
    ) -> Result<Booking, StoreError> {
        let mut bookings = self.inner.write().await;

        //check for overlaping
        let conflict = bookings.values().any(|b| {
            b.court_id == court_id
                && b.status != BookingStatus::Rejected
                && b.start_time < end_time
                && start_time < b.end_time
        });
        if conflict {
            return Err(StoreError::SlotConflict);
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            court_id,
            user_id,
            start_time,
            end_time,
            booking_date: OffsetDateTime::now_utc(),
            status: BookingStatus::Pending,
        };
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub async fn get(&self, id: Uuid) -> Result<Booking, StoreError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("booking"))
    }

    pub async fn list(&self, user_id: Option<Uuid>) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .inner
            .read()
            .await
            .values()
            .filter(|b| user_id.map_or(true, |u| b.user_id == u))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start_time);
        bookings
    }

    /// Snapshot of existing reservations for one court, the availability
    /// view's read model. Rejected bookings free their slot up again.
    pub async fn reservations_for_court(&self, court_id: Uuid) -> Vec<Reservation> {
        self.inner
            .read()
            .await
            .values()
            .filter(|b| b.court_id == court_id && b.status != BookingStatus::Rejected)
            .map(|b| Reservation {
                start_time: b.start_time,
            })
            .collect()
    }

    pub async fn approve(&self, id: Uuid) -> Result<Booking, StoreError> {
        self.transition(id, BookingStatus::Approved).await
    }

    pub async fn reject(&self, id: Uuid) -> Result<Booking, StoreError> {
        self.transition(id, BookingStatus::Rejected).await
    }

    async fn transition(&self, id: Uuid, status: BookingStatus) -> Result<Booking, StoreError> {
        let mut bookings = self.inner.write().await;
        let booking = bookings.get_mut(&id).ok_or(StoreError::NotFound("booking"))?;
        if booking.status != BookingStatus::Pending {
            return Err(StoreError::NotPending);
        }
        booking.status = status;
        Ok(booking.clone())
    }

    /// Cancel an own booking; only the booking owner may remove it.
    pub async fn cancel(&self, id: Uuid, user_id: Uuid) -> Result<(), StoreError> {
        let mut bookings = self.inner.write().await;
        match bookings.get(&id) {
            Some(b) if b.user_id == user_id => {
                bookings.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound("booking")),
        }
    }

    pub async fn count_approved_for_user(&self, user_id: Uuid) -> u64 {
        self.inner
            .read()
            .await
            .values()
            .filter(|b| b.user_id == user_id && b.status == BookingStatus::Approved)
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[tokio::test]
    async fn overlapping_booking_is_rejected() {
        let store = BookingStore::default();
        let court = Uuid::new_v4();
        let user = Uuid::new_v4();

        store
            .create(
                court,
                user,
                datetime!(2025 - 06 - 29 10:00 UTC),
                datetime!(2025 - 06 - 29 11:00 UTC),
            )
            .await
            .unwrap();

        let err = store
            .create(
                court,
                user,
                datetime!(2025 - 06 - 29 10:00 UTC),
                datetime!(2025 - 06 - 29 11:00 UTC),
            )
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::SlotConflict);

        //adjacent hour is fine
        store
            .create(
                court,
                user,
                datetime!(2025 - 06 - 29 11:00 UTC),
                datetime!(2025 - 06 - 29 12:00 UTC),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejected_booking_frees_the_slot() {
        let store = BookingStore::default();
        let court = Uuid::new_v4();
        let user = Uuid::new_v4();

        let booking = store
            .create(
                court,
                user,
                datetime!(2025 - 06 - 29 10:00 UTC),
                datetime!(2025 - 06 - 29 11:00 UTC),
            )
            .await
            .unwrap();
        store.reject(booking.id).await.unwrap();

        assert!(store.reservations_for_court(court).await.is_empty());
        store
            .create(
                court,
                user,
                datetime!(2025 - 06 - 29 10:00 UTC),
                datetime!(2025 - 06 - 29 11:00 UTC),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn only_pending_bookings_transition() {
        let store = BookingStore::default();
        let booking = store
            .create(
                Uuid::new_v4(),
                Uuid::new_v4(),
                datetime!(2025 - 06 - 29 10:00 UTC),
                datetime!(2025 - 06 - 29 11:00 UTC),
            )
            .await
            .unwrap();

        store.approve(booking.id).await.unwrap();
        assert_eq!(store.reject(booking.id).await.unwrap_err(), StoreError::NotPending);
    }
}
