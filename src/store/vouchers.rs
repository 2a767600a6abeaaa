use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::voucher::{ClientTier, TierVoucher};

/// Keyed by tier, so a tier can never hold more than one active voucher.
#[derive(Clone, Default)]
pub struct VoucherStore {
    inner: Arc<RwLock<HashMap<ClientTier, TierVoucher>>>,
}

impl VoucherStore {
    /// Assign a voucher to a tier, replacing whatever was there.
    pub async fn assign(&self, tier: ClientTier, voucher_type: String) -> TierVoucher {
        let mut vouchers = self.inner.write().await;
        let voucher = vouchers
            .entry(tier)
            .and_modify(|v| v.voucher_type = voucher_type.clone())
            .or_insert_with(|| TierVoucher {
                id: Uuid::new_v4(),
                tier,
                voucher_type,
            });
        voucher.clone()
    }

    pub async fn get_for_tier(&self, tier: ClientTier) -> Option<TierVoucher> {
        self.inner.read().await.get(&tier).cloned()
    }

    pub async fn list(&self) -> Vec<TierVoucher> {
        let vouchers = self.inner.read().await;
        ClientTier::ORDER
            .iter()
            .filter_map(|tier| vouchers.get(tier).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn one_voucher_per_tier() {
        let store = VoucherStore::default();
        let first = store.assign(ClientTier::Gold, "RM20".to_string()).await;
        let second = store.assign(ClientTier::Gold, "1_HOUR_FREE".to_string()).await;

        assert_eq!(first.id, second.id);
        assert_eq!(store.list().await.len(), 1);
        assert_eq!(
            store.get_for_tier(ClientTier::Gold).await.unwrap().voucher_type,
            "1_HOUR_FREE"
        );
        assert!(store.get_for_tier(ClientTier::Lead).await.is_none());
    }
}
