use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::engine::session::BookingSession;
use crate::store::StoreError;

/// Live booking sessions. A session exists from view entry until the booking
/// is confirmed or the user cancels.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, BookingSession>>>,
}

impl SessionStore {
    pub async fn insert(&self, session: BookingSession) -> Uuid {
        let id = session.id;
        self.inner.write().await.insert(id, session);
        id
    }

    /// Run `f` against one session under the write lock.
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut BookingSession) -> T,
    ) -> Result<T, StoreError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or(StoreError::NotFound("session"))?;
        Ok(f(session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("session"))
    }
}
