// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser header fingerprints
//!
//! A static table mapping each [`Browser`] to the Accept, Accept-Language,
//! Accept-Encoding and (for some browsers) Accept-Charset values that
//! browser sends by default, and [`apply`] to write them into a header map.

mod browser;
mod profile;

pub use browser::Browser;
pub use profile::{apply, HeaderProfile};
