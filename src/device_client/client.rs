use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::types::MonitorError;

use super::api_types::StatusSnapshot;
use super::helpers::join_url;
use super::transport::{CommandTransport, StatusSource};

const STATUS_PATH: &str = "/status";

/// HTTP client bound to a single nursery device.
#[derive(Clone)]
pub struct DeviceClient {
    http: Client,
    base_url: String,
}

impl DeviceClient {
    /// Prepare an HTTP client for the configured device.
    pub fn new(config: &Config) -> Result<Self, MonitorError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(MonitorError::Http)?;

        Ok(Self {
            http,
            base_url: config.device_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, MonitorError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.url_for(path))
            .send()
            .await
            .map_err(MonitorError::Http)?;

        if response.status() != StatusCode::OK {
            return Err(MonitorError::Device(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        response.json::<T>().await.map_err(MonitorError::Http)
    }
}

#[async_trait]
impl StatusSource for DeviceClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, MonitorError> {
        self.get_json(STATUS_PATH).await
    }
}

#[async_trait]
impl CommandTransport for DeviceClient {
    async fn send_command(&self, path: &str) -> Result<(), MonitorError> {
        self.http
            .get(self.url_for(path))
            .send()
            .await
            .map_err(MonitorError::Http)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_client::test_support::serve_once;

    const STATUS_BODY: &str = r#"{"time":"10:00","brightness":5,"temperature":70,"humidity":40}"#;

    fn client_for(base_url: String) -> DeviceClient {
        DeviceClient::new(&Config {
            device_base_url: base_url,
            ..Config::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn status_decodes_ok_response() {
        let (base_url, request) = serve_once("200 OK", STATUS_BODY).await;
        let snapshot = client_for(base_url).fetch_status().await.unwrap();
        assert_eq!(snapshot.brightness, 5);
        assert_eq!(snapshot.temperature, Some(70.0));
        assert_eq!(request.await.unwrap(), "GET /status HTTP/1.1");
    }

    #[tokio::test]
    async fn status_rejects_non_200() {
        let (base_url, _request) = serve_once("503 Service Unavailable", STATUS_BODY).await;
        let err = client_for(base_url).fetch_status().await.unwrap_err();
        assert!(matches!(err, MonitorError::Device(_)));
    }

    #[tokio::test]
    async fn status_rejects_undecodable_body() {
        let (base_url, _request) = serve_once("200 OK", "<html>").await;
        let err = client_for(base_url).fetch_status().await.unwrap_err();
        assert!(matches!(err, MonitorError::Http(_)));
    }

    #[tokio::test]
    async fn commands_ignore_the_response_status() {
        let (base_url, request) = serve_once("500 Internal Server Error", "").await;
        client_for(base_url).send_command("/off").await.unwrap();
        assert_eq!(request.await.unwrap(), "GET /off HTTP/1.1");
    }

    #[test]
    fn builds_urls_from_configured_base() {
        let config = Config {
            device_base_url: "http://nursery.local/".to_string(),
            ..Config::default()
        };
        let client = DeviceClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://nursery.local/");
        assert_eq!(client.url_for(STATUS_PATH), "http://nursery.local/status");
        assert_eq!(client.url_for("wake"), "http://nursery.local/wake");
    }
}
