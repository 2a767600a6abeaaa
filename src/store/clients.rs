use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::client::Client;
use crate::models::voucher::ClientTier;
use crate::store::StoreError;

#[derive(Clone, Default)]
pub struct ClientStore {
    inner: Arc<RwLock<HashMap<Uuid, Client>>>,
}

impl ClientStore {
    /// New clients start at the bottom tier.
    pub async fn create(&self, name: String) -> Client {
        let client = Client {
            id: Uuid::new_v4(),
            name,
            tier: ClientTier::Lead,
        };
        self.inner.write().await.insert(client.id, client.clone());
        client
    }

    pub async fn get(&self, id: Uuid) -> Result<Client, StoreError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("client"))
    }

    pub async fn list(&self) -> Vec<Client> {
        let mut clients: Vec<Client> = self.inner.read().await.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        clients
    }

    pub async fn set_tier(&self, id: Uuid, tier: ClientTier) -> Result<(), StoreError> {
        let mut clients = self.inner.write().await;
        let client = clients.get_mut(&id).ok_or(StoreError::NotFound("client"))?;
        client.tier = tier;
        Ok(())
    }
}
