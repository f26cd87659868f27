//! HTTP client for the debts service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use common::{AppError, AppResult, HealthProbe};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const DEBTS_RESOURCE: &str = "/customer/debts";

/// The part of a debts listing entry the score needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteDebt {
    #[serde(rename = "valor")]
    pub amount: f64,
}

/// Debts source trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DebtsClient: Send + Sync {
    /// Debts recorded for `document`; empty when the customer has none.
    async fn get_debts_by_document(&self, document: &str) -> AppResult<Vec<RemoteDebt>>;
}

/// reqwest-backed debts client
#[derive(Clone)]
pub struct HttpDebtsClient {
    client: Client,
    base_url: String,
}

impl HttpDebtsClient {
    /// Build a client for the debts service at `base_url`.
    ///
    /// Without a timeout, calls wait as long as the server keeps the
    /// connection open.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl DebtsClient for HttpDebtsClient {
    async fn get_debts_by_document(&self, document: &str) -> AppResult<Vec<RemoteDebt>> {
        let url = format!("{}{}/{}", self.base_url, DEBTS_RESOURCE, document);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(AppError::internal(format!(
                "debts service answered {status} for {url}"
            )));
        }

        Ok(response.json::<Vec<RemoteDebt>>().await?)
    }
}

#[async_trait]
impl HealthProbe for HttpDebtsClient {
    fn name(&self) -> &'static str {
        "debts-service"
    }

    async fn check(&self) -> Result<(), String> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode as AxumStatus, routing::get, Json, Router};
    use tokio::net::TcpListener;

    /// Serve a stand-in debts service on an ephemeral port.
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn debts_stub() -> Router {
        Router::new().route(
            "/customer/debts/:document",
            get(|Path(document): Path<String>| async move {
                match document.as_str() {
                    "72430024985" => Ok(Json(serde_json::json!([
                        {"id": "6f1c4c56-2d0f-4b59-9d1e-0b7c1f0e5a11", "cpf": "72430024985", "valor": 100.0,
                         "vencimento": "2025-01-10", "criadoEm": "2024-03-01T10:00:00Z"},
                        {"id": "0c9a2b0e-94c4-4f7e-8b1a-3f6f2b7d9e22", "cpf": "72430024985", "valor": 300.5,
                         "vencimento": "2025-02-10", "criadoEm": "2024-03-01T10:00:00Z"}
                    ]))),
                    "17185070031" => Err(AxumStatus::INTERNAL_SERVER_ERROR),
                    _ => Err(AxumStatus::NOT_FOUND),
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_fetches_amounts() {
        let base_url = serve(debts_stub()).await;
        let client = HttpDebtsClient::new(base_url, None).unwrap();

        let debts = client.get_debts_by_document("72430024985").await.unwrap();

        assert_eq!(
            debts,
            vec![RemoteDebt { amount: 100.0 }, RemoteDebt { amount: 300.5 }]
        );
    }

    #[tokio::test]
    async fn test_not_found_means_no_debts() {
        let base_url = serve(debts_stub()).await;
        let client = HttpDebtsClient::new(base_url, None).unwrap();

        let debts = client.get_debts_by_document("52998224725").await.unwrap();

        assert!(debts.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_failure() {
        let base_url = serve(debts_stub()).await;
        let client = HttpDebtsClient::new(base_url, None).unwrap();

        let result = client.get_debts_by_document("17185070031").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client =
            HttpDebtsClient::new(format!("http://{addr}"), Some(Duration::from_millis(500))).unwrap();

        let result = client.get_debts_by_document("72430024985").await;

        assert!(matches!(result, Err(AppError::Upstream(_))));
        assert!(client.check().await.is_err());
    }
}
