use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::adapter;
use crate::errors::RequisitionError;
use crate::gateway::RequisitionApi;
use crate::types::customer::Customer;
use crate::types::requisition::{CreateRequisitionData, Requisition, RequisitionQuery};

/// Cache state guarded by a single mutex
///
/// The lock is only ever held across in-memory mutation, never across an
/// await, so every cache replacement is one indivisible step as far as
/// readers are concerned.
#[derive(Default)]
struct CacheState {
    requisitions: Vec<Requisition>,
    /// Sequence number of the most recently issued fetch; responses from
    /// superseded fetches are discarded instead of applied
    fetch_issued: u64,
    /// Ids currently shown in the multi-order view, if one is open
    viewing: Option<Vec<String>>,
}

/// Authoritative client-side cache of the requisition list
///
/// Owns the list exclusively: callers read snapshots and mutate only
/// through the operations below. The cache is updated strictly from
/// server responses after a fully successful round trip, never
/// optimistically and never partially.
pub struct RequisitionStore {
    gateway: Arc<dyn RequisitionApi>,
    state: Mutex<CacheState>,
    // In-flight counters per operation kind; busy means count > 0, so
    // overlapping calls of the same kind cannot misreport idle
    fetching: AtomicU64,
    creating: AtomicU64,
    updating: AtomicU64,
    deleting: AtomicU64,
}

impl RequisitionStore {
    pub fn new(gateway: Arc<dyn RequisitionApi>) -> Self {
        Self {
            gateway,
            state: Mutex::new(CacheState::default()),
            fetching: AtomicU64::new(0),
            creating: AtomicU64::new(0),
            updating: AtomicU64::new(0),
            deleting: AtomicU64::new(0),
        }
    }

    /// Replace the cache with the server's current list for `query`
    ///
    /// Concurrent fetches may overlap; only the most recently issued one
    /// is allowed to touch the cache. A response arriving for a
    /// superseded fetch is still returned to its caller but never
    /// applied, so a stale result cannot overwrite a fresh one.
    pub async fn fetch_all(
        &self,
        query: &RequisitionQuery,
    ) -> Result<Vec<Requisition>, RequisitionError> {
        let seq = {
            let mut state = self.state.lock().unwrap();
            state.fetch_issued += 1;
            state.fetch_issued
        };

        self.fetching.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.list(query).await;
        self.fetching.fetch_sub(1, Ordering::SeqCst);

        let list = result.map_err(RequisitionError::Fetch)?;

        let mut state = self.state.lock().unwrap();
        if seq == state.fetch_issued {
            state.requisitions = list.clone();
        } else {
            tracing::debug!(
                seq,
                latest = state.fetch_issued,
                "Discarding superseded fetch response"
            );
        }
        Ok(list)
    }

    /// Create a requisition and append the server-returned record
    ///
    /// The cache only ever holds the record as the server assigned it,
    /// id and timestamps included, never the request payload.
    pub async fn create(
        &self,
        data: &CreateRequisitionData,
    ) -> Result<Requisition, RequisitionError> {
        self.creating.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.create(data).await;
        self.creating.fetch_sub(1, Ordering::SeqCst);

        let created = result.map_err(RequisitionError::Create)?;

        let mut state = self.state.lock().unwrap();
        state.requisitions.push(created.clone());
        Ok(created)
    }

    /// Replace the cache entry matching `id` with the server's record
    ///
    /// An id missing from the cache (stale filter/page) drops the cache
    /// update silently; the updated record is still returned. Callers
    /// that care can refresh via [`fetch_all`](Self::fetch_all).
    pub async fn update(
        &self,
        id: &str,
        data: &CreateRequisitionData,
    ) -> Result<Requisition, RequisitionError> {
        self.updating.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.update(id, data).await;
        self.updating.fetch_sub(1, Ordering::SeqCst);

        let updated = result.map_err(|source| RequisitionError::Update {
            id: id.to_string(),
            source,
        })?;

        let mut state = self.state.lock().unwrap();
        match state.requisitions.iter_mut().find(|r| r.id == id) {
            Some(entry) => *entry = updated.clone(),
            None => tracing::debug!(id, "Updated requisition not in cache, dropping"),
        }
        Ok(updated)
    }

    /// Delete a requisition and evict it everywhere it is shown
    ///
    /// Also drops the id from an open multi-order view; a view left empty
    /// closes itself rather than lingering as an empty modal.
    pub async fn delete(&self, id: &str) -> Result<(), RequisitionError> {
        self.deleting.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.delete(id).await;
        self.deleting.fetch_sub(1, Ordering::SeqCst);

        result.map_err(|source| RequisitionError::Delete {
            id: id.to_string(),
            source,
        })?;

        let mut state = self.state.lock().unwrap();
        state.requisitions.retain(|r| r.id != id);
        if let Some(viewing) = state.viewing.as_mut() {
            viewing.retain(|v| v != id);
            if viewing.is_empty() {
                state.viewing = None;
            }
        }
        Ok(())
    }

    /// Open the multi-order view over the given requisition ids
    pub fn open_view(&self, ids: Vec<String>) {
        let mut state = self.state.lock().unwrap();
        state.viewing = if ids.is_empty() { None } else { Some(ids) };
    }

    /// Close the multi-order view
    pub fn close_view(&self) {
        self.state.lock().unwrap().viewing = None;
    }

    /// Customers currently shown in the multi-order view
    ///
    /// Recomputed from the authoritative cache on every call; `None` when
    /// no view is open.
    pub fn viewing(&self) -> Option<Vec<Customer>> {
        let state = self.state.lock().unwrap();
        let ids = state.viewing.as_ref()?;
        Some(
            state
                .requisitions
                .iter()
                .filter(|r| ids.contains(&r.id))
                .map(adapter::to_customer)
                .collect(),
        )
    }

    /// Snapshot of the cached requisition list
    pub fn requisitions(&self) -> Vec<Requisition> {
        self.state.lock().unwrap().requisitions.clone()
    }

    /// The cached list projected through the shape adapter
    pub fn customers(&self) -> Vec<Customer> {
        self.state
            .lock()
            .unwrap()
            .requisitions
            .iter()
            .map(adapter::to_customer)
            .collect()
    }

    // Busy flags are independent per operation kind so a caller can
    // disable only the relevant controls; none of them gate each other.
    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::SeqCst) > 0
    }

    pub fn is_creating(&self) -> bool {
        self.creating.load(Ordering::SeqCst) > 0
    }

    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::SeqCst) > 0
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.load(Ordering::SeqCst) > 0
    }
}
