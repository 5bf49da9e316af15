// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-send options

use tokio_util::sync::CancellationToken;

/// When a send should be considered complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionOption {
    /// After the whole body has been read into memory
    #[default]
    ResponseContentRead,
    /// As soon as the status line and headers have arrived
    ResponseHeadersRead,
}

/// Options forwarded untouched to the underlying client
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Completion option
    pub completion: CompletionOption,
    /// Cancels the send when triggered
    pub cancellation: Option<CancellationToken>,
}

impl SendOptions {
    /// Default options: read the full body, no cancellation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the completion option
    pub fn completion(mut self, completion: CompletionOption) -> Self {
        self.completion = completion;
        self
    }

    /// Complete once headers are read
    pub fn headers_read(self) -> Self {
        self.completion(CompletionOption::ResponseHeadersRead)
    }

    /// Attach a cancellation token
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

impl From<CompletionOption> for SendOptions {
    fn from(completion: CompletionOption) -> Self {
        SendOptions::new().completion(completion)
    }
}

impl From<CancellationToken> for SendOptions {
    fn from(token: CancellationToken) -> Self {
        SendOptions::new().cancellation(token)
    }
}
