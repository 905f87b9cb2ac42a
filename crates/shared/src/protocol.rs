use serde::{Deserialize, Serialize};

use crate::domain::RequestType;

/// Route serving the record list (`GET`) and accepting submissions (`POST`).
pub fn messages_route() -> &'static str {
    "/messages"
}

pub fn health_route() -> &'static str {
    "/healthz"
}

/// Body of `POST /messages`.
///
/// `date` is already formatted as `DD.MM.YYYY`; the server stores it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequestPayload {
    pub user: String,
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub description: String,
    pub date: String,
    /// File name of the staged image, when one was attached in the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}
