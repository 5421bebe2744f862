//! The HTTP seam between the descriptor and the Gemini endpoint.

use async_trait::async_trait;

use crate::error::{DescribeError, DescribeResult};

/// Status and raw body of an HTTP reply.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and returns whatever came back.
///
/// Uses `async_trait` so descriptors can hold a `Box<dyn Transport>` and
/// tests can swap in a canned implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transport name for logging.
    fn name(&self) -> &str;

    /// POST `body` as `application/json` to `url`.
    ///
    /// Non-2xx replies are returned as `Ok`; only failures to get a reply at
    /// all are errors.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> DescribeResult<HttpReply>;
}

/// Production transport backed by a `reqwest` client with its default timeout.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn post_json(&self, url: &str, body: Vec<u8>) -> DescribeResult<HttpReply> {
        let resp = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DescribeError::Transport {
                // reqwest errors can echo the URL, which carries the API key
                message: format!("Gemini request failed: {}", e.without_url()),
                status_code: None,
                body: None,
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| DescribeError::Transport {
            message: format!("Failed to read Gemini response body: {}", e.without_url()),
            status_code: Some(status),
            body: None,
        })?;

        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_success_range() {
        let reply = |status| HttpReply {
            status,
            body: String::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(429).is_success());
        assert!(!reply(500).is_success());
    }

    /// Accept one connection, capture the raw request, answer with `status` and `body`.
    async fn serve_once(
        listener: tokio::net::TcpListener,
        status_line: &'static str,
        body: &'static str,
    ) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    }

    #[tokio::test]
    async fn test_server_error_reply_is_returned_with_status_and_body() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(
            listener,
            "500 Internal Server Error",
            r#"{"error":"boom"}"#,
        ));

        let transport = ReqwestTransport::new();
        let reply = transport
            .post_json(
                &format!("http://{addr}/v1beta/models/m:generateContent?key=k"),
                br#"{"contents":[]}"#.to_vec(),
            )
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(reply.status, 500);
        assert!(!reply.is_success());
        assert_eq!(reply.body, r#"{"error":"boom"}"#);

        let lowered = request.to_ascii_lowercase();
        assert!(lowered.starts_with("post /v1beta/models/m:generatecontent?key=k "));
        assert!(lowered.contains("\r\ncontent-type: application/json\r\n"));
        assert!(request.ends_with(r#"{"contents":[]}"#));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) on localhost is almost never listening
        let transport = ReqwestTransport::new();
        let err = transport
            .post_json("http://127.0.0.1:9/v1beta/models/x:generateContent", b"{}".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DescribeError::Transport {
                status_code: None,
                ..
            }
        ));
    }
}
