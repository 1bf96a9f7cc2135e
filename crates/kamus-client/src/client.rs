use std::time::Duration;

use async_trait::async_trait;
use kamus_config::api::ApiConfig;
use kamus_types::LookupResult;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;

use crate::Lexicon;
use crate::error::LookupError;
use crate::parse::parse;

/// Path-segment escaping: alphanumerics plus `_ . - ~ /` pass through,
/// everything else is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Clone)]
pub struct KbbiClient {
    base_url: String,
    client: reqwest::Client,
}

impl KbbiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// The one fetch primitive behind all three operations. No retries; a
    /// failed attempt surfaces immediately and the caller decides.
    async fn fetch(&self, path: &str) -> Result<LookupResult, LookupError> {
        let url = format!("{}/entry/{}", self.base_url, path);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::warn!("KBBI API: no entry behind {url}");
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!("KBBI API: HTTP {} for {url}", status.as_u16());
            return Err(LookupError::Transport(format!("HTTP {}", status.as_u16())));
        }

        let payload: serde_json::Value = response.json().await?;
        parse(&payload)
    }
}

#[async_trait]
impl Lexicon for KbbiClient {
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError> {
        let safe_query = utf8_percent_encode(query, PATH_SEGMENT).to_string();
        self.fetch(&safe_query).await
    }

    async fn word_of_the_day(&self) -> Result<LookupResult, LookupError> {
        self.fetch("_wotd").await
    }

    async fn random_entry(&self) -> Result<LookupResult, LookupError> {
        self.fetch("_random").await
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    #[test]
    fn query_terms_are_escaped_into_the_path() {
        let escaped = utf8_percent_encode("tanggung jawab", PATH_SEGMENT).to_string();
        assert_eq!(escaped, "tanggung%20jawab");

        let unreserved = utf8_percent_encode("ke_te-pel.an~/x", PATH_SEGMENT).to_string();
        assert_eq!(unreserved, "ke_te-pel.an~/x");
    }

    /// One-shot loopback server; returns the base URL and a handle yielding
    /// the request head it saw.
    fn serve_once(response: &'static str) -> (String, std::thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut buf = [0u8; 2048];
            let n = socket.read(&mut buf).unwrap();
            socket.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });

        (format!("http://{addr}"), handle)
    }

    fn client_for(base_url: String) -> KbbiClient {
        let config = ApiConfig {
            base_url,
            user_agent: "kamus-test".to_string(),
            timeout_seconds: 5,
        };
        KbbiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn http_404_maps_to_not_found() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        );

        let outcome = client_for(base_url).search("zzz").await;

        assert_eq!(outcome, Err(LookupError::NotFound));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn other_failure_statuses_map_to_transport() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        );

        let outcome = client_for(base_url).word_of_the_day().await;

        assert_eq!(outcome, Err(LookupError::Transport("HTTP 500".to_string())));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn a_success_body_flows_through_the_parser() {
        let body = r#"{"lemma":"makan","entries":[]}"#;
        let response = Box::leak(
            format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            )
            .into_boxed_str(),
        );
        let (base_url, server) = serve_once(response);

        let result = client_for(base_url).search("tanggung jawab").await.unwrap();

        assert_eq!(result.lemma, "makan");
        assert!(result.entries.is_empty());

        let request_head = server.join().unwrap();
        assert!(request_head.starts_with("GET /entry/tanggung%20jawab HTTP/1.1"));
        assert!(request_head.to_lowercase().contains("user-agent: kamus-test"));
    }

    #[tokio::test]
    async fn a_non_json_success_body_is_invalid_format() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot\njson\n",
        );

        let outcome = client_for(base_url).random_entry().await;

        assert_eq!(outcome, Err(LookupError::InvalidFormat));
        server.join().unwrap();
    }
}
