// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;

use super::options::{CompletionOption, SendOptions};
use super::request::Request;
use super::response::Response;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, ErrorContext, Result};
use crate::fingerprint::{self, Browser};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Initial default headers
    pub default_headers: HeaderMap,
    /// Browser profile applied over `default_headers` at construction
    pub browser: Option<Browser>,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            accept_invalid_certs: false,
            default_headers: HeaderMap::new(),
            browser: None,
            proxy: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Config whose default headers start out as `browser`'s profile
    pub fn for_browser(browser: Browser) -> Self {
        Self::default().browser(browser)
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set maximum redirects
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Accept invalid TLS certificates
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the browser profile
    pub fn browser(mut self, browser: Browser) -> Self {
        self.browser = Some(browser);
        self
    }

    /// Add default header. Invalid names or values are ignored.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.default_headers.append(name, value);
        }
        self
    }
}

/// HTTP client with a mutable, shared set of default request headers
///
/// Clones share the same connection pool and the same default headers.
///
/// reqwest fills in `Accept: */*` and an `Accept-Encoding` matching the
/// enabled decoders (gzip, deflate, br) whenever neither the default headers
/// nor the request set them. After [`Browser::Unspecified`] clears the
/// fingerprint those transport defaults are what goes on the wire.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    default_headers: Arc<RwLock<HeaderMap>>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        // Default headers are merged per request so they stay mutable.
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        let mut default_headers = config.default_headers.clone();
        if let Some(browser) = config.browser {
            fingerprint::apply(&mut default_headers, browser);
        }

        Ok(Self {
            client,
            config,
            default_headers: Arc::new(RwLock::new(default_headers)),
        })
    }

    /// Snapshot of the headers sent with every request
    pub fn default_headers(&self) -> HeaderMap {
        self.default_headers.read().clone()
    }

    /// Mutate the default headers in place
    pub fn with_default_headers<R>(&self, f: impl FnOnce(&mut HeaderMap) -> R) -> R {
        f(&mut *self.default_headers.write())
    }

    /// Execute a GET request
    pub async fn get(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::get(url)?).await
    }

    /// Execute a POST request
    pub async fn post(&self, url: impl AsRef<str>, body: impl Into<Bytes>) -> Result<Response> {
        self.execute(Request::post(url)?.body(body)).await
    }

    /// Execute a PUT request
    pub async fn put(&self, url: impl AsRef<str>, body: impl Into<Bytes>) -> Result<Response> {
        self.execute(Request::put(url)?.body(body)).await
    }

    /// Execute a DELETE request
    pub async fn delete(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::delete(url)?).await
    }

    /// Execute a request with default options
    pub async fn execute(&self, request: Request) -> Result<Response> {
        self.send(request, SendOptions::default()).await
    }

    /// Send a request.
    ///
    /// Fails with [`Error::Cancelled`] if the token in `options` fires before
    /// the send completes (including the body read for
    /// [`CompletionOption::ResponseContentRead`]).
    pub async fn send(&self, request: Request, options: SendOptions) -> Result<Response> {
        let method = request.method.clone();
        let url = request.url.clone();

        tracing::debug!(
            method = %method,
            url = %url,
            completion = ?options.completion,
            "Request"
        );

        let result = match options.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::cancelled(method.as_str())),
                    result = self.send_inner(request, options.completion) => result,
                }
            }
            None => self.send_inner(request, options.completion).await,
        }
        .with_url(url.as_str());

        match &result {
            Ok(response) => tracing::info!(
                url = %url,
                status = %response.status,
                time_ms = response.response_time_ms,
                "Response"
            ),
            Err(e) => tracing::debug!(method = %method, url = %url, error = %e, "Request failed"),
        }

        result
    }

    async fn send_inner(&self, request: Request, completion: CompletionOption) -> Result<Response> {
        let start = Instant::now();
        let timeout = request.timeout.unwrap_or(self.config.timeout);
        let method = request.method.clone();
        let url = request.url.clone();

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(self.merged_headers(request.headers));

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let timed_out = |e: reqwest::Error| {
            if e.is_timeout() {
                Error::timeout(method.as_str(), timeout.as_millis() as u64)
            } else {
                Error::Http(e)
            }
        };

        let response = builder.send().await.map_err(timed_out)?;
        let redirected = response.url() != &url;

        match completion {
            CompletionOption::ResponseHeadersRead => {
                let response_time = start.elapsed().as_millis() as u64;
                Ok(Response::streaming(response, redirected, response_time))
            }
            CompletionOption::ResponseContentRead => {
                let final_url = response.url().clone();
                let status = response.status();
                let headers = response.headers().clone();
                let body = response.bytes().await.map_err(timed_out)?;
                let response_time = start.elapsed().as_millis() as u64;

                Ok(Response::buffered(
                    status,
                    headers,
                    body,
                    final_url,
                    redirected,
                    response_time,
                ))
            }
        }
    }

    /// Request headers with every default header the request does not set
    fn merged_headers(&self, mut headers: HeaderMap) -> HeaderMap {
        let defaults = self.default_headers.read();
        for name in defaults.keys() {
            if !headers.contains_key(name) {
                for value in defaults.get_all(name) {
                    headers.append(name.clone(), value.clone());
                }
            }
        }
        headers
    }

    /// Execute multiple requests concurrently
    pub async fn execute_all(&self, requests: Vec<Request>) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests.into_iter().map(|r| self.execute(r)).collect();
        futures::future::join_all(futures).await
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}
