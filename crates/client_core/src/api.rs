use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::RequestRecord,
    error::ApiError,
    protocol::{messages_route, NewRequestPayload},
};
use tracing::{debug, info};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Remote side of the tracker: the record source and the submission endpoint.
#[async_trait]
pub trait RequestApi: Send + Sync {
    async fn fetch_requests(&self) -> ClientResult<Vec<RequestRecord>>;
    async fn submit_request(&self, payload: &NewRequestPayload) -> ClientResult<()>;
}

pub struct HttpRequestApi {
    http: Client,
    messages_url: Url,
}

impl HttpRequestApi {
    pub fn new(server_url: &str) -> ClientResult<Self> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> ClientResult<Self> {
        let base = Url::parse(server_url.trim_end_matches('/'))?;
        let messages_url = base.join(messages_route())?;
        Ok(Self { http, messages_url })
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }
}

#[async_trait]
impl RequestApi for HttpRequestApi {
    async fn fetch_requests(&self) -> ClientResult<Vec<RequestRecord>> {
        let response = self.http.get(self.messages_url.clone()).send().await?;
        let records: Vec<RequestRecord> = ensure_success(response).await?.json().await?;
        debug!(count = records.len(), url = %self.messages_url, "fetched requests");
        Ok(records)
    }

    async fn submit_request(&self, payload: &NewRequestPayload) -> ClientResult<()> {
        let response = self
            .http
            .post(self.messages_url.clone())
            .json(payload)
            .send()
            .await?;
        ensure_success(response).await?;
        info!(
            user = %payload.user,
            kind = %payload.kind,
            date = %payload.date,
            "request submitted"
        );
        Ok(())
    }
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|err| err.message)
        .unwrap_or(body);
    Err(ClientError::Api { status, message })
}
