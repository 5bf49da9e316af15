// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # browser-headers - Browser Header Fingerprints for reqwest
//!
//! Make HTTP requests whose Accept, Accept-Language, Accept-Encoding and
//! Accept-Charset headers match what a given browser sends by default.
//!
//! ## Features
//!
//! - Static profiles for Firefox, Chrome, Safari, Maxthon, Opera and IE6-IE10
//! - `apply` to rewrite any reqwest `HeaderMap` in place
//! - `BrowserExt`: GET/POST/PUT/DELETE/send wrappers taking a `Browser`
//! - JSON, XML, form and custom typed bodies
//! - Completion options (buffer the body or stream it) and cancellation
//!
//! ## Example
//!
//! ```rust,no_run
//! use browser_headers::{Browser, BrowserExt, HttpClient, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new()?;
//!
//!     let response = client
//!         .get_as("https://example.com", SendOptions::new(), Browser::Firefox)
//!         .await?;
//!     println!("{} ({} bytes)", response.status, response.body().map_or(0, |b| b.len()));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extensions;
pub mod fingerprint;
pub mod http;

// Re-exports for convenience

// Fingerprints
pub use fingerprint::{apply, Browser, HeaderProfile};

// Wrappers
pub use extensions::{BrowserExt, Dispatch};

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{
    BodyFormatter, CompletionOption, Content, FormFormatter, HttpClient, HttpClientConfig,
    JsonFormatter, Request, RequestBuilder, Response, SendOptions, XmlFormatter,
};

pub use tokio_util::sync::CancellationToken;

/// browser-headers version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
