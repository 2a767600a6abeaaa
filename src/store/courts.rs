use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::court::Court;
use crate::models::sport::Sport;
use crate::store::StoreError;

#[derive(Clone, Default)]
pub struct CourtStore {
    inner: Arc<RwLock<HashMap<Uuid, Court>>>,
}

impl CourtStore {
    pub async fn create(&self, name: String, sport: Sport) -> Court {
        let court = Court {
            id: Uuid::new_v4(),
            name,
            sport,
        };
        self.inner.write().await.insert(court.id, court.clone());
        court
    }

    pub async fn get(&self, id: Uuid) -> Result<Court, StoreError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("court"))
    }

    pub async fn list(&self, sport: Option<Sport>) -> Vec<Court> {
        let mut courts: Vec<Court> = self
            .inner
            .read()
            .await
            .values()
            .filter(|c| sport.map_or(true, |s| c.sport == s))
            .cloned()
            .collect();
        courts.sort_by(|a, b| a.name.cmp(&b.name));
        courts
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
