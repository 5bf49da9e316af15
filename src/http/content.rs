// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Typed request bodies

use bytes::Bytes;
use reqwest::header::HeaderValue;
use serde::Serialize;

use crate::error::{Error, Result};

/// Serializes typed values into request bodies
pub trait BodyFormatter {
    /// Content-Type written when the caller does not override it
    fn media_type(&self) -> &str;

    /// Serialize `value` into body bytes
    fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes>;
}

/// `application/json` bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl BodyFormatter for JsonFormatter {
    fn media_type(&self) -> &str {
        "application/json"
    }

    fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(value)?))
    }
}

/// `application/xml` bodies
///
/// Structs become an element named after the type, with one child element
/// per field. Field names starting with `@` are written as attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormatter;

impl BodyFormatter for XmlFormatter {
    fn media_type(&self) -> &str {
        "application/xml"
    }

    fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        quick_xml::se::to_string(value)
            .map(Bytes::from)
            .map_err(|e| Error::format(format!("xml: {}", e)))
    }
}

/// `application/x-www-form-urlencoded` bodies
///
/// The value must serialize to a flat struct or map of scalars. Fields are
/// written in declaration order and `None` fields are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFormatter;

impl BodyFormatter for FormFormatter {
    fn media_type(&self) -> &str {
        "application/x-www-form-urlencoded"
    }

    fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        serde_urlencoded::to_string(value)
            .map(Bytes::from)
            .map_err(|e| Error::format(format!("form: {}", e)))
    }
}

/// Serialized body plus its Content-Type
#[derive(Debug, Clone)]
pub struct Content {
    /// Body bytes
    pub body: Bytes,
    /// Content-Type header value
    pub content_type: HeaderValue,
}

impl Content {
    /// Format `value`; `media_type`, when given, replaces the formatter's
    /// Content-Type
    pub fn formatted<T, F>(value: &T, formatter: &F, media_type: Option<&str>) -> Result<Self>
    where
        T: Serialize + ?Sized,
        F: BodyFormatter,
    {
        let media_type = media_type.unwrap_or_else(|| formatter.media_type());
        let content_type = HeaderValue::from_str(media_type)
            .map_err(|_| Error::format(format!("invalid media type '{}'", media_type)))?;

        Ok(Self {
            body: formatter.format(value)?,
            content_type,
        })
    }
}
