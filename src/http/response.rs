// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Response body, either fully read or still on the wire
#[derive(Debug)]
enum Body {
    Buffered(Option<Bytes>),
    Streaming(reqwest::Response),
}

/// HTTP response representation
#[derive(Debug)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Final URL (after redirects)
    pub url: Url,
    /// Whether this was a redirect
    pub redirected: bool,
    /// Time until the response was returned, in milliseconds
    pub response_time_ms: u64,
    body: Body,
}

impl Response {
    /// Create a response whose body has already been read
    pub fn buffered(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Url,
        redirected: bool,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status,
            headers,
            url,
            redirected,
            response_time_ms,
            body: Body::Buffered(Some(body)),
        }
    }

    /// Wrap a response whose body has not been read yet
    pub(crate) fn streaming(
        response: reqwest::Response,
        redirected: bool,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
            redirected,
            response_time_ms,
            body: Body::Streaming(response),
        }
    }

    /// Whether the body is already in memory
    pub fn is_buffered(&self) -> bool {
        matches!(self.body, Body::Buffered(_))
    }

    /// Buffered body, if the response was read to completion
    pub fn body(&self) -> Option<&Bytes> {
        match &self.body {
            Body::Buffered(body) => body.as_ref(),
            Body::Streaming(_) => None,
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Turn a non-success status into [`Error::Status`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::status(self.status, self.url.as_str()))
        }
    }

    /// Read the next chunk of the body. Returns `None` once exhausted.
    ///
    /// A buffered body is yielded as a single chunk.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        match &mut self.body {
            Body::Buffered(body) => Ok(body.take()),
            Body::Streaming(response) => Ok(response.chunk().await?),
        }
    }

    /// Consume the response, returning the remaining body
    pub async fn bytes(self) -> Result<Bytes> {
        match self.body {
            Body::Buffered(body) => Ok(body.unwrap_or_default()),
            Body::Streaming(response) => Ok(response.bytes().await?),
        }
    }

    /// Consume the response, returning the body as text
    pub async fn text(self) -> Result<String> {
        let body = self.bytes().await?;
        String::from_utf8(body.to_vec()).map_err(|e| Error::Other(e.to_string()))
    }

    /// Consume the response, parsing the body as JSON
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get content length
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length").and_then(|v| v.parse().ok())
    }

    /// Get the final URL as string
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }
}
