//! HTTP client wrapper - executes counter API calls and maps failures
//! into the fixed messages the UI displays

use std::time::{Duration, Instant};

use crate::constants::COUNTER_NAME;
use crate::messages::NetworkResponse;
use crate::models::{CounterOp, CounterValue, HistoryResponse};

/// Thin wrapper binding a reqwest client to the counter API base URL
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ApiClient {
            http,
            base_url: base_url.into(),
        }
    }

    /// URL for a counter read (`Load`) or write command
    fn counter_url(&self, op: CounterOp) -> String {
        let resource = format!("{}/api/counter/{}", self.base_url, COUNTER_NAME);
        if op.is_write() {
            format!("{}/{}", resource, op.as_str())
        } else {
            resource
        }
    }

    fn history_url(&self, limit: usize) -> String {
        format!(
            "{}/api/counter/{}/history?limit={}",
            self.base_url, COUNTER_NAME, limit
        )
    }

    async fn fetch_value(&self, op: CounterOp) -> reqwest::Result<CounterValue> {
        let url = self.counter_url(op);
        let request = if op.is_write() {
            self.http.post(&url)
        } else {
            self.http.get(&url)
        };
        request
            .send()
            .await?
            .error_for_status()?
            .json::<CounterValue>()
            .await
    }

    async fn fetch_history(&self, limit: usize) -> reqwest::Result<HistoryResponse> {
        self.http
            .get(self.history_url(limit))
            .send()
            .await?
            .error_for_status()?
            .json::<HistoryResponse>()
            .await
    }
}

/// Execute a counter call and convert the outcome into a NetworkResponse
///
/// Unreachable server, non-2xx status and malformed bodies all collapse into
/// the operation's fixed message; the underlying error only goes to the log.
pub async fn execute_counter_request(client: &ApiClient, op: CounterOp, id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = client.fetch_value(op).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(payload) => NetworkResponse::CounterOk {
            id,
            op,
            value: payload.value,
            time_ms,
        },
        Err(e) => {
            tracing::warn!(id, op = op.as_str(), error = %e, "Counter request failed");
            NetworkResponse::CounterFailed {
                id,
                op,
                message: op.failure_message().to_string(),
                time_ms,
            }
        }
    }
}

/// Execute a history fetch; failures carry detail for the log only
pub async fn execute_history_request(client: &ApiClient, id: u64, limit: usize) -> NetworkResponse {
    match client.fetch_history(limit).await {
        Ok(payload) => NetworkResponse::HistoryOk {
            id,
            entries: payload.history,
        },
        Err(e) => NetworkResponse::HistoryFailed {
            id,
            message: format!("Failed to fetch history: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_urls() {
        let client = ApiClient::new("http://localhost:3001");
        assert_eq!(
            client.counter_url(CounterOp::Load),
            "http://localhost:3001/api/counter/main"
        );
        assert_eq!(
            client.counter_url(CounterOp::Increment),
            "http://localhost:3001/api/counter/main/increment"
        );
        assert_eq!(
            client.counter_url(CounterOp::Reset),
            "http://localhost:3001/api/counter/main/reset"
        );
    }

    #[test]
    fn test_history_url() {
        let client = ApiClient::new("http://localhost:3001");
        assert_eq!(
            client.history_url(10),
            "http://localhost:3001/api/counter/main/history?limit=10"
        );
    }
}
