use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use chrono::NaiveDate;
use shared::{
    domain::{RequestId, RequestRecord, RequestStatus},
    error::{ApiError, ErrorCode},
    protocol::NewRequestPayload,
};
use tokio::sync::RwLock;
use tracing::info;

pub const SUBMISSION_DATE_FORMAT: &str = "%d.%m.%Y";

/// Memory-only record list behind the HTTP routes. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct ApiContext {
    records: Arc<RwLock<Vec<RequestRecord>>>,
}

impl ApiContext {
    pub fn new(seed: Vec<RequestRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(seed)),
        }
    }
}

/// Reads a JSON array of records, e.g. a fixture exported from another
/// deployment.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<RequestRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
    let records: Vec<RequestRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("seed file '{}' is not a record array", path.display()))?;
    Ok(records)
}

pub async fn list_requests(ctx: &ApiContext) -> Vec<RequestRecord> {
    ctx.records.read().await.clone()
}

pub async fn get_request(ctx: &ApiContext, id: RequestId) -> Result<RequestRecord, ApiError> {
    ctx.records
        .read()
        .await
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .ok_or_else(|| ApiError::new(ErrorCode::NotFound, format!("request {id} not found")))
}

/// Appends a new pending request with the next free id.
pub async fn create_request(
    ctx: &ApiContext,
    payload: NewRequestPayload,
) -> Result<RequestRecord, ApiError> {
    validate_payload(&payload)?;

    let mut records = ctx.records.write().await;
    let next_id = records.iter().map(|record| record.id.0).max().unwrap_or(0) + 1;
    let record = RequestRecord {
        id: RequestId(next_id),
        user: payload.user.trim().to_string(),
        kind: payload.kind,
        description: payload.description.trim().to_string(),
        date: payload.date,
        status: RequestStatus::Pending,
    };
    records.push(record.clone());
    info!(
        id = %record.id,
        kind = %record.kind,
        attachment = payload.attachment.as_deref().unwrap_or("-"),
        "request created"
    );
    Ok(record)
}

fn validate_payload(payload: &NewRequestPayload) -> Result<(), ApiError> {
    if payload.user.trim().is_empty() {
        return Err(validation("user cannot be empty"));
    }
    if payload.description.trim().is_empty() {
        return Err(validation("description cannot be empty"));
    }
    if NaiveDate::parse_from_str(&payload.date, SUBMISSION_DATE_FORMAT).is_err() {
        return Err(validation(format!(
            "date '{}' must be formatted as DD.MM.YYYY",
            payload.date
        )));
    }
    Ok(())
}

fn validation(message: impl Into<String>) -> ApiError {
    ApiError::new(ErrorCode::Validation, message)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
