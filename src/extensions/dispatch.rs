// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Seam between the browser wrappers and the client that sends requests

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::Result;
use crate::http::{HttpClient, Request, Response, SendOptions};

/// A client with mutable default headers that can send requests
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Run `f` against the headers sent with every request
    fn update_default_headers(&self, f: &mut dyn FnMut(&mut HeaderMap));

    /// Send `request` with `options`
    async fn dispatch(&self, request: Request, options: SendOptions) -> Result<Response>;
}

#[async_trait]
impl Dispatch for HttpClient {
    fn update_default_headers(&self, f: &mut dyn FnMut(&mut HeaderMap)) {
        self.with_default_headers(|headers| f(headers))
    }

    async fn dispatch(&self, request: Request, options: SendOptions) -> Result<Response> {
        self.send(request, options).await
    }
}
