// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser identifiers

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::{self, HeaderProfile};

/// Browser whose default request headers should be imitated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// Mozilla Firefox
    Firefox,
    /// Google Chrome
    Chrome,
    /// Apple Safari
    Safari,
    /// Maxthon
    Maxthon,
    /// Opera (Presto)
    Opera,
    /// Internet Explorer 10
    IE10,
    /// Internet Explorer 9
    IE9,
    /// Internet Explorer 8
    IE8,
    /// Internet Explorer 7
    IE7,
    /// Internet Explorer 6
    IE6,
    /// No particular browser. Only clears the base Accept headers.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Browser {
    /// Every browser that has a header profile
    pub const ALL: [Browser; 10] = [
        Browser::Firefox,
        Browser::Chrome,
        Browser::Safari,
        Browser::Maxthon,
        Browser::Opera,
        Browser::IE10,
        Browser::IE9,
        Browser::IE8,
        Browser::IE7,
        Browser::IE6,
    ];

    /// Header profile for this browser, `None` for [`Browser::Unspecified`]
    pub fn profile(self) -> Option<&'static HeaderProfile> {
        profile::lookup(self)
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
            Browser::Safari => "safari",
            Browser::Maxthon => "maxthon",
            Browser::Opera => "opera",
            Browser::IE10 => "ie10",
            Browser::IE9 => "ie9",
            Browser::IE8 => "ie8",
            Browser::IE7 => "ie7",
            Browser::IE6 => "ie6",
            Browser::Unspecified => "unspecified",
        }
    }

    /// Resolve a browser from a loose name.
    ///
    /// Case, spaces, dashes and underscores are ignored, and the usual
    /// Internet Explorer spellings (`msie9`, `internet explorer 9`) are
    /// accepted. Anything unrecognised resolves to [`Browser::Unspecified`].
    pub fn from_name(name: &str) -> Browser {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
            .flat_map(char::to_lowercase)
            .collect();

        let ie_version = normalized
            .strip_prefix("internetexplorer")
            .or_else(|| normalized.strip_prefix("msie"))
            .or_else(|| normalized.strip_prefix("ie"));

        if let Some(version) = ie_version {
            return match version {
                "10" => Browser::IE10,
                "9" => Browser::IE9,
                "8" => Browser::IE8,
                "7" => Browser::IE7,
                "6" => Browser::IE6,
                _ => Browser::Unspecified,
            };
        }

        match normalized.as_str() {
            "firefox" | "ff" | "mozilla" => Browser::Firefox,
            "chrome" | "googlechrome" => Browser::Chrome,
            "safari" => Browser::Safari,
            "maxthon" => Browser::Maxthon,
            "opera" => Browser::Opera,
            _ => Browser::Unspecified,
        }
    }

    /// Whether this browser sends an Accept-Charset header
    pub fn sends_accept_charset(self) -> bool {
        self.profile()
            .map(|p| p.accept_charset.is_some())
            .unwrap_or(false)
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Browser {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Browser::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Browser::from_name("Firefox"), Browser::Firefox);
        assert_eq!(Browser::from_name("CHROME"), Browser::Chrome);
        assert_eq!(Browser::from_name("ie10"), Browser::IE10);
        assert_eq!(Browser::from_name("IE 9"), Browser::IE9);
        assert_eq!(Browser::from_name("msie8"), Browser::IE8);
        assert_eq!(Browser::from_name("Internet Explorer 7"), Browser::IE7);
        assert_eq!(Browser::from_name("internet_explorer-6"), Browser::IE6);
    }

    #[test]
    fn test_unknown_names_are_unspecified() {
        assert_eq!(Browser::from_name("netscape"), Browser::Unspecified);
        assert_eq!(Browser::from_name("ie11"), Browser::Unspecified);
        assert_eq!(Browser::from_name(""), Browser::Unspecified);
        assert_eq!("lynx".parse::<Browser>(), Ok(Browser::Unspecified));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for browser in Browser::ALL {
            assert_eq!(browser.to_string().parse::<Browser>(), Ok(browser));
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Browser::IE10).unwrap(), "\"ie10\"");
        assert_eq!(serde_json::to_string(&Browser::Maxthon).unwrap(), "\"maxthon\"");

        let parsed: Browser = serde_json::from_str("\"opera\"").unwrap();
        assert_eq!(parsed, Browser::Opera);

        let unknown: Browser = serde_json::from_str("\"edge\"").unwrap();
        assert_eq!(unknown, Browser::Unspecified);
    }

    #[test]
    fn test_accept_charset_senders() {
        let senders: Vec<Browser> = Browser::ALL
            .into_iter()
            .filter(|b| b.sends_accept_charset())
            .collect();
        assert_eq!(senders, vec![Browser::Chrome, Browser::Maxthon]);
        assert!(!Browser::Unspecified.sends_accept_charset());
    }
}
