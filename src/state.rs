use crate::models::sport::Sport;
use crate::store::bookings::BookingStore;
use crate::store::clients::ClientStore;
use crate::store::courts::CourtStore;
use crate::store::payments::PaymentStore;
use crate::store::sessions::SessionStore;
use crate::store::vouchers::VoucherStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub courts: CourtStore,
    pub bookings: BookingStore,
    pub payments: PaymentStore,
    pub vouchers: VoucherStore,
    pub clients: ClientStore,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new() -> AppState {
        AppState::default()
    }

    /// Seed two courts per sport so the service is browsable out of the box.
    pub async fn seed_courts(&self) {
        if !self.courts.is_empty().await {
            return;
        }
        for sport in Sport::ALL {
            for n in 1..=2 {
                let name = format!("{} court {n}", sport.as_str());
                self.courts.create(name, sport).await;
            }
        }
        tracing::info!("seeded default courts");
    }
}
