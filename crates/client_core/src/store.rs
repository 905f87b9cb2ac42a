use shared::domain::{RequestId, RequestRecord};
use tracing::info;

use crate::{api::RequestApi, error::ClientResult};

/// Authoritative in-memory copy of the remote record list.
///
/// The store never edits records; it is only ever replaced wholesale by a
/// reload.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    records: Vec<RequestRecord>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RequestRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RequestId) -> Option<&RequestRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replaces the records with a fresh fetch. On error the previous list
    /// is kept.
    pub async fn reload(&mut self, api: &dyn RequestApi) -> ClientResult<usize> {
        let records = api.fetch_requests().await?;
        info!(count = records.len(), "request store reloaded");
        self.records = records;
        Ok(self.records.len())
    }
}
