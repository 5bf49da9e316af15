// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser-impersonating request wrappers
//!
//! [`BrowserExt`] adds one operation per HTTP verb to any [`Dispatch`]
//! implementation (such as [`crate::HttpClient`]). Each call applies the
//! browser's header fingerprint, then forwards to the client.

mod browser_ext;
mod dispatch;

pub use browser_ext::BrowserExt;
pub use dispatch::Dispatch;
