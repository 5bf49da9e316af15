// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! A reqwest-backed client whose default request headers can be rewritten
//! between sends, plus request/response types, typed bodies and per-send
//! options (completion and cancellation).

mod client;
mod content;
mod options;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use content::{BodyFormatter, Content, FormFormatter, JsonFormatter, XmlFormatter};
pub use options::{CompletionOption, SendOptions};
pub use request::{Request, RequestBuilder};
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
