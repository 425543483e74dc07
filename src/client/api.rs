//! Core `Classifier` trait and `ApiClassifier` implementation.
//!
//! `ApiClassifier` POSTs a JSON transcript to the service's `/disposition`
//! endpoint and decodes the verdict. All connection details come from
//! [`ApiConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::transcript::Transcript;

use super::result::ClassificationResult;

/// Error message shown when a failed response carries no usable `detail`.
pub const REMOTE_ERROR_FALLBACK: &str = "Failed to classify disposition";

// ---------------------------------------------------------------------------
// ClassifyError
// ---------------------------------------------------------------------------

/// Errors that can occur during a classification call.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Transport-level failure — connection refused, DNS, broken pipe.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status. Carries the `detail`
    /// field from the error body, or [`REMOTE_ERROR_FALLBACK`] when the body
    /// has none or does not parse.
    #[error("{0}")]
    Remote(String),

    /// A success response whose body could not be decoded as a
    /// [`ClassificationResult`].
    #[error("failed to parse classification response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClassifyError {
    fn from(e: reqwest::Error) -> Self {
        ClassifyError::Network(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Classifier trait
// ---------------------------------------------------------------------------

/// Async trait for transcript classification backends.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn Classifier>`).
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        transcript: &Transcript,
    ) -> Result<ClassificationResult, ClassifyError>;
}

// ---------------------------------------------------------------------------
// ApiClassifier
// ---------------------------------------------------------------------------

/// Calls the disposition classification REST endpoint.
///
/// One call per submission — no retry, no cancellation, and no per-request
/// timeout: classifying a long transcript can legitimately take a while and
/// the UI shows a loading state for the duration.
pub struct ApiClassifier {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClassifier {
    /// Build an `ApiClassifier` from application config.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }
}

#[async_trait]
impl Classifier for ApiClassifier {
    /// POST the transcript to `{base_url}/disposition` and decode the verdict.
    ///
    /// The transcript serializes to exactly the message objects the user
    /// pasted — extra keys and all.
    async fn classify(
        &self,
        transcript: &Transcript,
    ) -> Result<ClassificationResult, ClassifyError> {
        let url = format!(
            "{}/disposition",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self.client.post(&url).json(transcript).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the service's own `detail` message when the error body
            // carries one; otherwise fall back to a generic message.
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| Some(body.get("detail")?.as_str()?.to_string()));

            log::warn!("classification endpoint returned {status}");
            return Err(ClassifyError::Remote(
                detail.unwrap_or_else(|| REMOTE_ERROR_FALLBACK.to_string()),
            ));
        }

        response
            .json::<ClassificationResult>()
            .await
            .map_err(|e| ClassifyError::Parse(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::task::JoinHandle;

    fn make_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
        }
    }

    fn sample_transcript() -> Transcript {
        Transcript::parse(r#"[{"role":"user","content":"Hello"}]"#).unwrap()
    }

    // -----------------------------------------------------------------------
    // One-shot canned HTTP server
    // -----------------------------------------------------------------------

    /// Serve exactly one request with a fixed response, then close.
    ///
    /// Resolves to the raw request (head + body) so tests can assert on the
    /// request line, headers and payload.
    async fn canned_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "client closed before headers were complete");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length: usize = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse().unwrap())
                })
                .unwrap_or(0);

            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "client closed mid-body");
                buf.extend_from_slice(&chunk[..n]);
            }

            let request_body =
                String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            format!("{head}{request_body}")
        });

        (format!("http://{addr}"), handle)
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn from_config_builds_without_panic() {
        let _classifier = ApiClassifier::from_config(&make_config("http://localhost:8000"));
    }

    /// Verify that `ApiClassifier` is object-safe (usable as `dyn Classifier`).
    #[test]
    fn classifier_is_object_safe() {
        let classifier: Box<dyn Classifier> =
            Box::new(ApiClassifier::from_config(&make_config("http://localhost:8000")));
        drop(classifier);
    }

    // -----------------------------------------------------------------------
    // Wire contract
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn success_response_decodes() {
        let (base_url, server) = canned_server(
            "200 OK",
            r#"{"Disposition_code":"PTP_ON_SPECIFIC_DATE","confidence":0.92,"explanation":"Clear commitment","summary":"Customer will pay tomorrow.","key_points":["payment promised"]}"#,
        )
        .await;

        let classifier = ApiClassifier::from_config(&make_config(&base_url));
        let result = classifier.classify(&sample_transcript()).await.unwrap();

        assert_eq!(result.disposition_code, "PTP_ON_SPECIFIC_DATE");
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.key_points, vec!["payment promised".to_string()]);

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with("post /disposition http/1.1"));
        assert!(request.contains("content-type: application/json"));
    }

    /// The POSTed payload must be exactly what the user pasted — extra keys
    /// and non-string values included.
    #[tokio::test]
    async fn payload_is_forwarded_unchanged() {
        let (base_url, server) = canned_server(
            "200 OK",
            r#"{"Disposition_code":"X","confidence":1.0,"explanation":"e"}"#,
        )
        .await;

        let raw = r#"[{"role":"agent","content":"EMI 3450 due","turn":1},{"role":"user","content":null}]"#;
        let transcript = Transcript::parse(raw).unwrap();

        let classifier = ApiClassifier::from_config(&make_config(&base_url));
        classifier.classify(&transcript).await.unwrap();

        let request = server.await.unwrap();
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(sent, original);
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let (base_url, server) = canned_server(
            "200 OK",
            r#"{"Disposition_code":"X","confidence":1.0,"explanation":"e"}"#,
        )
        .await;

        let classifier = ApiClassifier::from_config(&make_config(&format!("{base_url}/")));
        classifier.classify(&sample_transcript()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /disposition "));
    }

    // -----------------------------------------------------------------------
    // Failure paths
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn non_success_with_detail_surfaces_detail() {
        let (base_url, _server) =
            canned_server("422 Unprocessable Entity", r#"{"detail":"bad input"}"#).await;

        let classifier = ApiClassifier::from_config(&make_config(&base_url));
        let err = classifier.classify(&sample_transcript()).await.unwrap_err();

        match err {
            ClassifyError::Remote(detail) => assert_eq!(detail, "bad input"),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_with_unparseable_body_uses_fallback() {
        let (base_url, _server) =
            canned_server("500 Internal Server Error", "<html>oops</html>").await;

        let classifier = ApiClassifier::from_config(&make_config(&base_url));
        let err = classifier.classify(&sample_transcript()).await.unwrap_err();

        match err {
            ClassifyError::Remote(detail) => assert_eq!(detail, REMOTE_ERROR_FALLBACK),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    /// A parseable error body without `detail` also falls back.
    #[tokio::test]
    async fn non_success_without_detail_field_uses_fallback() {
        let (base_url, _server) =
            canned_server("500 Internal Server Error", r#"{"error":"exploded"}"#).await;

        let classifier = ApiClassifier::from_config(&make_config(&base_url));
        let err = classifier.classify(&sample_transcript()).await.unwrap_err();

        match err {
            ClassifyError::Remote(detail) => assert_eq!(detail, REMOTE_ERROR_FALLBACK),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_with_unparseable_body_is_parse_error() {
        let (base_url, _server) = canned_server("200 OK", "not json at all").await;

        let classifier = ApiClassifier::from_config(&make_config(&base_url));
        let err = classifier.classify(&sample_transcript()).await.unwrap_err();

        assert!(matches!(err, ClassifyError::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        // Bind to grab a free port, then drop the listener so nothing answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let classifier = ApiClassifier::from_config(&make_config(&format!("http://{addr}")));
        let err = classifier.classify(&sample_transcript()).await.unwrap_err();

        assert!(matches!(err, ClassifyError::Network(_)));
    }

    /// `Remote` must display the bare detail message — it is shown to the
    /// user as-is.
    #[test]
    fn remote_error_displays_detail_verbatim() {
        assert_eq!(ClassifyError::Remote("bad input".into()).to_string(), "bad input");
    }
}
