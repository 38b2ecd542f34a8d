use gloo_net::http::Request;
use thiserror::Error;

use crate::config::ApiBase;
use crate::types::Employee;

/// Everything that can go wrong with the one GET this app makes. The
/// profile view collapses all three into a single message; the variants
/// exist so the log line says which leg failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("error fetching employee {id} (HTTP {status})")]
    Http { id: String, status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed employee response: {0}")]
    Decode(String),
}

/// One attempt, no retry. Non-2xx is failure, with no distinction
/// between 404 and 500.
pub async fn fetch_employee(base: &ApiBase, id: &str) -> Result<Employee, FetchError> {
    let url = base.employee_url(id);
    log::info!("fetching employee {id} from {url}");

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        log::error!("employee {id} fetch returned HTTP {}", resp.status());
        return Err(FetchError::Http {
            id: id.to_string(),
            status: resp.status(),
        });
    }

    resp.json::<Employee>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
