use std::time::Duration;

use crate::models::client::tier_for_booking_count;
use crate::state::AppState;

const TIER_UPDATE_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Background task that recomputes every client's tier from their approved
/// booking count, once a day.
pub fn spawn_tier_updater(state: AppState) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(TIER_UPDATE_INTERVAL);
        loop {
            ticker.tick().await;
            update_tiers(&state).await;
        }
    });
}

pub async fn update_tiers(state: &AppState) {
    tracing::info!("running client tier update");

    for client in state.clients.list().await {
        let count = state.bookings.count_approved_for_user(client.id).await;
        let tier = tier_for_booking_count(count);
        if tier != client.tier {
            if state.clients.set_tier(client.id, tier).await.is_ok() {
                tracing::info!(
                    client = %client.id,
                    tier = tier.as_str(),
                    approved_bookings = count,
                    "updated client tier"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::voucher::ClientTier;
    use time::macros::datetime;
    use time::Duration as TimeDuration;
    use uuid::Uuid;

    #[tokio::test]
    async fn promotes_clients_past_the_iron_threshold() {
        let state = AppState::new();
        let client = state.clients.create("amir".to_string()).await;
        let court = Uuid::new_v4();

        for i in 0..6 {
            let start = datetime!(2025 - 06 - 01 10:00 UTC) + TimeDuration::days(i);
            let booking = state
                .bookings
                .create(court, client.id, start, start + TimeDuration::hours(1))
                .await
                .unwrap();
            state.bookings.approve(booking.id).await.unwrap();
        }

        update_tiers(&state).await;
        assert_eq!(state.clients.get(client.id).await.unwrap().tier, ClientTier::Iron);
    }

    #[tokio::test]
    async fn pending_bookings_do_not_count() {
        let state = AppState::new();
        let client = state.clients.create("mei".to_string()).await;
        let court = Uuid::new_v4();

        for i in 0..10 {
            let start = datetime!(2025 - 06 - 01 10:00 UTC) + TimeDuration::days(i);
            state
                .bookings
                .create(court, client.id, start, start + TimeDuration::hours(1))
                .await
                .unwrap();
        }

        update_tiers(&state).await;
        assert_eq!(state.clients.get(client.id).await.unwrap().tier, ClientTier::Lead);
    }
}
