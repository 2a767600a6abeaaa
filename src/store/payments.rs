use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::payment::{Payment, PaymentStatus};
use crate::store::StoreError;

#[derive(Clone, Default)]
pub struct PaymentStore {
    inner: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl PaymentStore {
    pub async fn create(&self, booking_id: Uuid, amount: Decimal, status: PaymentStatus) -> Payment {
        let payment = Payment {
            id: Uuid::new_v4(),
            booking_id,
            amount,
            status,
        };
        self.inner.write().await.insert(payment.id, payment.clone());
        payment
    }

    pub async fn get(&self, id: Uuid) -> Result<Payment, StoreError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("payment"))
    }

    pub async fn find_for_booking(&self, booking_id: Uuid) -> Option<Payment> {
        self.inner
            .read()
            .await
            .values()
            .find(|p| p.booking_id == booking_id)
            .cloned()
    }
}
