//! Client for the destinations backend.
//!
//! The backend is an external collaborator; this module only consumes its
//! four endpoints. Controllers depend on the `DestinationApi` trait so
//! tests can substitute an in-memory implementation.

mod http;

pub use http::HttpDestinationApi;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Destination, DestinationDraft};

/// Failure classes stay distinct here; the controllers collapse them all
/// into log-and-keep-state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Acknowledgement body returned by the write endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[async_trait]
pub trait DestinationApi: Send + Sync {
    /// GET `/api/obtenerDatos`: the full collection.
    async fn fetch_destinations(&self) -> ApiResult<Vec<Destination>>;

    /// POST `/api/insertarDatos`: create one destination from a draft.
    async fn insert_destination(&self, draft: &DestinationDraft) -> ApiResult<Ack>;

    /// DELETE `/api/eliminarDato/{id}`: status-only response.
    async fn delete_destination(&self, id: i64) -> ApiResult<()>;

    /// POST `/api/crearNuevaTabla`: administrative, not part of the page flow.
    async fn create_table(&self) -> ApiResult<Ack>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::models::{Destination, DestinationDraft};

    use super::{Ack, ApiError, ApiResult, DestinationApi};

    /// Scripted in-memory backend for controller tests.
    pub struct MockApi {
        destinations: Mutex<Vec<Destination>>,
        insert_message: String,
        fail_fetch: AtomicBool,
        fail_insert: AtomicBool,
        fail_delete_ids: Mutex<HashSet<i64>>,
        deleted: Mutex<Vec<i64>>,
        inserted: Mutex<Vec<DestinationDraft>>,
    }

    impl MockApi {
        pub fn new(destinations: Vec<Destination>) -> Self {
            Self {
                destinations: Mutex::new(destinations),
                insert_message: "Datos insertados correctamente".into(),
                fail_fetch: AtomicBool::new(false),
                fail_insert: AtomicBool::new(false),
                fail_delete_ids: Mutex::new(HashSet::new()),
                deleted: Mutex::new(Vec::new()),
                inserted: Mutex::new(Vec::new()),
            }
        }

        pub fn set_destinations(&self, destinations: Vec<Destination>) {
            *self.destinations.lock().unwrap() = destinations;
        }

        pub fn fail_fetch(&self, fail: bool) {
            self.fail_fetch.store(fail, Ordering::SeqCst);
        }

        pub fn fail_insert(&self, fail: bool) {
            self.fail_insert.store(fail, Ordering::SeqCst);
        }

        pub fn fail_delete_of(&self, id: i64) {
            self.fail_delete_ids.lock().unwrap().insert(id);
        }

        pub fn heal_delete_of(&self, id: i64) {
            self.fail_delete_ids.lock().unwrap().remove(&id);
        }

        pub fn deleted_ids(&self) -> Vec<i64> {
            self.deleted.lock().unwrap().clone()
        }

        pub fn inserted_drafts(&self) -> Vec<DestinationDraft> {
            self.inserted.lock().unwrap().clone()
        }

        fn server_error() -> ApiError {
            ApiError::Status {
                status: 500,
                body: "Internal Server Error".into(),
            }
        }
    }

    #[async_trait]
    impl DestinationApi for MockApi {
        async fn fetch_destinations(&self) -> ApiResult<Vec<Destination>> {
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Self::server_error());
            }
            Ok(self.destinations.lock().unwrap().clone())
        }

        async fn insert_destination(&self, draft: &DestinationDraft) -> ApiResult<Ack> {
            if self.fail_insert.load(Ordering::SeqCst) {
                return Err(Self::server_error());
            }
            self.inserted.lock().unwrap().push(draft.clone());
            Ok(Ack {
                message: self.insert_message.clone(),
            })
        }

        async fn delete_destination(&self, id: i64) -> ApiResult<()> {
            if self.fail_delete_ids.lock().unwrap().contains(&id) {
                return Err(Self::server_error());
            }
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }

        async fn create_table(&self) -> ApiResult<Ack> {
            Ok(Ack {
                message: "Tabla creada".into(),
            })
        }
    }
}
