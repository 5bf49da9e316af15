// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Static header profiles and their application to a header map

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE,
};

use super::browser::Browser;

const ACCEPT_DOCUMENT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_OPERA: &str = "text/html, application/xml;q=0.9, application/xhtml+xml, image/png, image/webp, image/jpeg, image/gif, image/x-xbitmap, */*;q=0.1";
const ACCEPT_IE_MODERN: &str = "text/html, application/xhtml+xml, */*";
const ACCEPT_IE_LEGACY: &str = "*/*";
const LANG_EN_US: &str = "en-US";
const ENCODING_GZIP_DEFLATE: &str = "gzip, deflate";
const CHARSET_LATIN1_UTF8: &str = "ISO-8859-1,utf-8;q=0.7,*;q=0.3";

/// Accept-family header values sent by a browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderProfile {
    /// Accept
    pub accept: Option<&'static str>,
    /// Accept-Language
    pub accept_language: Option<&'static str>,
    /// Accept-Encoding
    pub accept_encoding: Option<&'static str>,
    /// Accept-Charset. Only set for browsers that actually send it.
    pub accept_charset: Option<&'static str>,
}

impl HeaderProfile {
    const fn new(
        accept: &'static str,
        accept_language: &'static str,
        accept_encoding: &'static str,
    ) -> Self {
        Self {
            accept: Some(accept),
            accept_language: Some(accept_language),
            accept_encoding: Some(accept_encoding),
            accept_charset: None,
        }
    }

    const fn with_charset(mut self, charset: &'static str) -> Self {
        self.accept_charset = Some(charset);
        self
    }

    /// Header name/value pairs in the order a browser writes them
    pub fn entries(&self) -> Vec<(HeaderName, &'static str)> {
        [
            (ACCEPT, self.accept),
            (ACCEPT_LANGUAGE, self.accept_language),
            (ACCEPT_ENCODING, self.accept_encoding),
            (ACCEPT_CHARSET, self.accept_charset),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// Profile as a standalone header map
    pub fn header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in self.entries() {
            headers.append(name, HeaderValue::from_static(value));
        }
        headers
    }
}

static FIREFOX: HeaderProfile =
    HeaderProfile::new(ACCEPT_DOCUMENT, "en-US,en;q=0.5", ENCODING_GZIP_DEFLATE);
static CHROME: HeaderProfile =
    HeaderProfile::new(ACCEPT_DOCUMENT, "en-US,en;q=0.8", "gzip,deflate,sdch")
        .with_charset(CHARSET_LATIN1_UTF8);
static SAFARI: HeaderProfile =
    HeaderProfile::new(ACCEPT_DOCUMENT, LANG_EN_US, ENCODING_GZIP_DEFLATE);
static MAXTHON: HeaderProfile =
    HeaderProfile::new(ACCEPT_DOCUMENT, LANG_EN_US, ENCODING_GZIP_DEFLATE)
        .with_charset(CHARSET_LATIN1_UTF8);
static OPERA: HeaderProfile =
    HeaderProfile::new(ACCEPT_OPERA, "en-US,en;q=0.9", ENCODING_GZIP_DEFLATE);
// IE9 and IE10 share one profile, as do IE6 through IE8.
static IE_MODERN: HeaderProfile =
    HeaderProfile::new(ACCEPT_IE_MODERN, LANG_EN_US, ENCODING_GZIP_DEFLATE);
static IE_LEGACY: HeaderProfile =
    HeaderProfile::new(ACCEPT_IE_LEGACY, LANG_EN_US, ENCODING_GZIP_DEFLATE);

pub(super) fn lookup(browser: Browser) -> Option<&'static HeaderProfile> {
    match browser {
        Browser::Firefox => Some(&FIREFOX),
        Browser::Chrome => Some(&CHROME),
        Browser::Safari => Some(&SAFARI),
        Browser::Maxthon => Some(&MAXTHON),
        Browser::Opera => Some(&OPERA),
        Browser::IE10 | Browser::IE9 => Some(&IE_MODERN),
        Browser::IE8 | Browser::IE7 | Browser::IE6 => Some(&IE_LEGACY),
        Browser::Unspecified => None,
    }
}

/// Rewrite the Accept-family headers in `headers` to match `browser`.
///
/// Accept, Accept-Language and Accept-Encoding are always removed first.
/// Accept-Charset is only replaced for browsers whose profile carries one
/// (Chrome and Maxthon) and is left exactly as it was otherwise.
pub fn apply(headers: &mut HeaderMap, browser: Browser) {
    headers.remove(ACCEPT);
    headers.remove(ACCEPT_LANGUAGE);
    headers.remove(ACCEPT_ENCODING);

    let Some(profile) = lookup(browser) else {
        tracing::debug!(browser = %browser, "Cleared accept headers");
        return;
    };

    if profile.accept_charset.is_some() {
        headers.remove(ACCEPT_CHARSET);
    }

    for (name, value) in profile.entries() {
        headers.append(name, HeaderValue::from_static(value));
    }

    tracing::debug!(browser = %browser, "Applied browser header profile");
}
