//! Thin HTTP layer over `reqwest`.
//!
//! Responses are read fully into a plain [`Response`] so callers can inspect the
//! status and decode the body without holding on to `reqwest` types. Only GET is
//! needed by the directory API.

use std::time::Duration;

use log::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("sedir/", env!("CARGO_PKG_VERSION"));

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

pub type HttpResult<T> = Result<T, HttpError>;

/// Shared client; cloning is cheap and reuses the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> HttpResult<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder {
            client: self.inner.clone(),
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter; order is preserved.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub async fn send(self) -> HttpResult<Response> {
        debug!("GET {} {:?}", self.url, self.query);

        let mut request = self.client.get(&self.url).query(&self.query);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(400, b"").is_success());
        assert!(!response(502, b"").is_success());
    }

    #[test]
    fn json_body_decodes() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Quota {
            quota_remaining: u32,
        }

        let r = response(200, br#"{"quota_remaining": 299}"#);
        let quota: Quota = r.json().expect("valid json");
        assert_eq!(quota, Quota { quota_remaining: 299 });
    }

    #[test]
    fn query_pairs_keep_insertion_order() {
        let client = Client::new().expect("client builds");
        let builder = client
            .get("https://example.com/users")
            .query("page", "1")
            .query("pagesize", "20")
            .query("site", "stackoverflow");

        let names: Vec<&str> = builder
            .query_pairs()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, ["page", "pagesize", "site"]);
    }

    #[test]
    fn http_error_displays_message_verbatim() {
        assert_eq!(HttpError::new("connection refused").to_string(), "connection refused");
    }
}
