//! HTTP download of the dataset.

use tracing::{debug, info};

use super::Dataset;
use crate::error::{Error, Result};

/// Monthly global land-surface temperature dataset, 1753 onwards.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Fetches and parses the dataset at `url` with a single GET.
///
/// There is no retry: a transport failure, a non-success status or a body
/// that does not parse is returned to the caller as is.
pub async fn fetch_dataset(client: &reqwest::Client, url: &str) -> Result<Dataset> {
    info!(url, "Fetching dataset");

    let response = client.get(url).send().await.map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = body.len(), "Dataset downloaded");

    let dataset = Dataset::from_json_str(&body)?;
    info!(observations = dataset.observations().len(), "Dataset loaded");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let client = reqwest::Client::new();
        let err = fetch_dataset(&client, "http://127.0.0.1:1/global-temperature.json")
            .await
            .unwrap_err();

        match err {
            Error::Fetch { url, .. } => assert!(url.ends_with("global-temperature.json")),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_url_is_json() {
        assert!(DEFAULT_DATASET_URL.starts_with("https://"));
        assert!(DEFAULT_DATASET_URL.ends_with(".json"));
    }
}
