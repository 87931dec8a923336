//! HTTP catalog gateway

use crate::config::FileCatalogConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};
use roster_application::{CatalogError, CatalogGateway};
use roster_domain::{CatalogRequest, CatalogSearchResponse, CatalogUnit};
use tracing::{debug, warn};

/// Quick-search endpoint, relative to the catalog base URL
pub const QUICK_LIST_PATH: &str = "/Unit/QuickList";

/// Build the quick-search URL for a request.
///
/// `Factions` is repeated once per faction code, in request order.
pub fn search_url(base: &Url, request: &CatalogRequest) -> Result<Url, CatalogError> {
    let mut url = base
        .join(QUICK_LIST_PATH)
        .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base, e)))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("Name", &request.name);
        pairs.append_pair("AvailableEras", &request.era);
        for faction in &request.factions {
            pairs.append_pair("Factions", faction);
        }
    }
    Ok(url)
}

/// Catalog gateway backed by the Master Unit List web service
pub struct MulCatalogGateway {
    client: Client,
    base_url: Url,
}

impl MulCatalogGateway {
    /// Create a gateway from the `[catalog]` configuration
    pub fn new(config: &FileCatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CatalogError::ConnectionError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn map_send_error(error: reqwest::Error) -> CatalogError {
    if error.is_timeout() {
        CatalogError::Timeout
    } else {
        CatalogError::ConnectionError(error.to_string())
    }
}

#[async_trait]
impl CatalogGateway for MulCatalogGateway {
    async fn search_units(
        &self,
        request: &CatalogRequest,
    ) -> Result<Vec<CatalogUnit>, CatalogError> {
        let url = search_url(&self.base_url, request)?;
        debug!("Catalog search {}", request);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog search {} failed: HTTP {}", request, status.as_u16());
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: CatalogSearchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::InvalidResponse(e.to_string())
            }
        })?;

        let units = body.into_units();
        debug!("Catalog search {} returned {} units", request, units.len());
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one HTTP response and hand back the request head
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base, handle)
    }

    fn gateway(base: &str) -> MulCatalogGateway {
        MulCatalogGateway::new(&FileCatalogConfig {
            base_url: base.to_string(),
            ..FileCatalogConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_search_url_repeats_factions() {
        let base = Url::parse("http://masterunitlist.info").unwrap();
        let request = CatalogRequest::new("Atlas AS7-D", "3025", "14").with_optional_faction(Some("2"));
        let url = search_url(&base, &request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://masterunitlist.info/Unit/QuickList?Name=Atlas+AS7-D&AvailableEras=3025&Factions=14&Factions=2"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = MulCatalogGateway::new(&FileCatalogConfig {
            base_url: "not a url".to_string(),
            ..FileCatalogConfig::default()
        });
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_search_parses_units() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"Units":[{"Id":140,"Name":"Atlas AS7-D","BFPointValue":52},{"Id":141,"Name":"Atlas AS7-K"}]}"#,
        )
        .await;

        let request = CatalogRequest::new("Atlas", "3025", "14");
        let units = gateway(&base).search_units(&request).await.unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].name, "Atlas AS7-D");
        assert_eq!(units[0].point_value, Some(52));

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /Unit/QuickList?Name=Atlas&AvailableEras=3025&Factions=14 "));
    }

    #[tokio::test]
    async fn test_null_units_is_empty() {
        let (base, _server) = serve_once("200 OK", r#"{"Units":null}"#).await;
        let request = CatalogRequest::new("Nothing", "3025", "14");
        assert!(gateway(&base).search_units(&request).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let (base, _server) = serve_once("503 Service Unavailable", "").await;
        let request = CatalogRequest::new("Atlas AS7-D", "3025", "14");
        let err = gateway(&base).search_units(&request).await.unwrap_err();
        assert!(matches!(err, CatalogError::HttpStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (base, _server) = serve_once("200 OK", "<html>").await;
        let request = CatalogRequest::new("Atlas AS7-D", "3025", "14");
        let err = gateway(&base).search_units(&request).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse(_)));
    }
}
