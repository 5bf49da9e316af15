// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request wrappers that impersonate a browser

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::Serialize;

use super::dispatch::Dispatch;
use crate::error::Result;
use crate::fingerprint::{self, Browser};
use crate::http::{BodyFormatter, JsonFormatter, Request, Response, SendOptions, XmlFormatter};

/// Send requests with a browser's header fingerprint.
///
/// Every operation rewrites the client's default Accept headers for
/// `browser` exactly once, then hands the remaining arguments unchanged to
/// [`Dispatch::dispatch`]. The fingerprint stays on the client afterwards,
/// so a client shared between tasks should be used with one browser at a
/// time.
#[async_trait]
pub trait BrowserExt: Dispatch {
    /// Apply `browser`'s fingerprint to the client's default headers
    fn impersonate(&self, browser: Browser) {
        self.update_default_headers(&mut |headers: &mut HeaderMap| {
            fingerprint::apply(headers, browser)
        });
    }

    /// Send a prepared request
    async fn send_as(
        &self,
        request: Request,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response> {
        self.impersonate(browser);
        self.dispatch(request, options).await
    }

    /// Send a GET request
    async fn get_as(&self, url: &str, options: SendOptions, browser: Browser) -> Result<Response> {
        self.impersonate(browser);
        self.dispatch(Request::get(url)?, options).await
    }

    /// Send a DELETE request
    async fn delete_as(
        &self,
        url: &str,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response> {
        self.impersonate(browser);
        self.dispatch(Request::delete(url)?, options).await
    }

    /// Send a POST request with a raw body
    async fn post_as<B>(
        &self,
        url: &str,
        body: B,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        B: Into<Bytes> + Send,
    {
        self.impersonate(browser);
        self.dispatch(Request::post(url)?.body(body), options).await
    }

    /// Send a PUT request with a raw body
    async fn put_as<B>(
        &self,
        url: &str,
        body: B,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        B: Into<Bytes> + Send,
    {
        self.impersonate(browser);
        self.dispatch(Request::put(url)?.body(body), options).await
    }

    /// POST `value` as JSON
    async fn post_json_as<T>(
        &self,
        url: &str,
        value: &T,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.impersonate(browser);
        let request = Request::post(url)?.formatted(value, &JsonFormatter, None)?;
        self.dispatch(request, options).await
    }

    /// PUT `value` as JSON
    async fn put_json_as<T>(
        &self,
        url: &str,
        value: &T,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.impersonate(browser);
        let request = Request::put(url)?.formatted(value, &JsonFormatter, None)?;
        self.dispatch(request, options).await
    }

    /// POST `value` as XML
    async fn post_xml_as<T>(
        &self,
        url: &str,
        value: &T,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.impersonate(browser);
        let request = Request::post(url)?.formatted(value, &XmlFormatter, None)?;
        self.dispatch(request, options).await
    }

    /// PUT `value` as XML
    async fn put_xml_as<T>(
        &self,
        url: &str,
        value: &T,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.impersonate(browser);
        let request = Request::put(url)?.formatted(value, &XmlFormatter, None)?;
        self.dispatch(request, options).await
    }

    /// POST `value` serialized by `formatter`. `media_type` replaces the
    /// formatter's Content-Type when given.
    #[allow(clippy::too_many_arguments)]
    async fn post_formatted_as<T, F>(
        &self,
        url: &str,
        value: &T,
        formatter: &F,
        media_type: Option<&str>,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized + Sync,
        F: BodyFormatter + Sync,
    {
        self.impersonate(browser);
        let request = Request::post(url)?.formatted(value, formatter, media_type)?;
        self.dispatch(request, options).await
    }

    /// PUT `value` serialized by `formatter`. `media_type` replaces the
    /// formatter's Content-Type when given.
    #[allow(clippy::too_many_arguments)]
    async fn put_formatted_as<T, F>(
        &self,
        url: &str,
        value: &T,
        formatter: &F,
        media_type: Option<&str>,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response>
    where
        T: Serialize + ?Sized + Sync,
        F: BodyFormatter + Sync,
    {
        self.impersonate(browser);
        let request = Request::put(url)?.formatted(value, formatter, media_type)?;
        self.dispatch(request, options).await
    }

    /// GET the body as bytes. Non-success statuses are errors.
    async fn get_bytes_as(
        &self,
        url: &str,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Bytes> {
        let response = self.get_as(url, options, browser).await?;
        response.error_for_status()?.bytes().await
    }

    /// GET the body as text. Non-success statuses are errors.
    async fn get_string_as(
        &self,
        url: &str,
        options: SendOptions,
        browser: Browser,
    ) -> Result<String> {
        let response = self.get_as(url, options, browser).await?;
        response.error_for_status()?.text().await
    }

    /// GET without buffering the body; read it with [`Response::chunk`].
    /// Non-success statuses are errors.
    async fn get_stream_as(
        &self,
        url: &str,
        options: SendOptions,
        browser: Browser,
    ) -> Result<Response> {
        let response = self.get_as(url, options.headers_read(), browser).await?;
        response.error_for_status()
    }
}

#[async_trait]
impl<D: Dispatch + ?Sized> BrowserExt for D {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::{CompletionOption, FormFormatter};
    use parking_lot::Mutex;
    use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE};
    use reqwest::{Method, StatusCode};
    use tokio_test::{assert_err, assert_ok};
    use tokio_util::sync::CancellationToken;
    use url::Url;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Apply,
        Dispatch,
    }

    /// Records every interaction instead of touching the network
    #[derive(Default)]
    struct Recorder {
        headers: Mutex<HeaderMap>,
        calls: Mutex<Vec<Call>>,
        sent: Mutex<Vec<(Request, SendOptions)>>,
        status: Option<StatusCode>,
    }

    impl Recorder {
        fn with_status(status: StatusCode) -> Self {
            Self {
                status: Some(status),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }

        fn last_sent(&self) -> (Request, SendOptions) {
            self.sent.lock().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Dispatch for Recorder {
        fn update_default_headers(&self, f: &mut dyn FnMut(&mut HeaderMap)) {
            self.calls.lock().push(Call::Apply);
            f(&mut *self.headers.lock());
        }

        async fn dispatch(&self, request: Request, options: SendOptions) -> Result<Response> {
            self.calls.lock().push(Call::Dispatch);
            let url = request.url.clone();
            self.sent.lock().push((request, options));
            Ok(Response::buffered(
                self.status.unwrap_or(StatusCode::OK),
                HeaderMap::new(),
                Bytes::from_static(b"recorded"),
                url,
                false,
                0,
            ))
        }
    }

    #[tokio::test]
    async fn test_get_applies_once_then_forwards() {
        let recorder = Recorder::default();
        let token = CancellationToken::new();
        let options = SendOptions::new().headers_read().cancellation(token.clone());

        assert_ok!(recorder.get_as("https://example.com/a?b=c", options, Browser::IE9).await);

        assert_eq!(recorder.calls(), vec![Call::Apply, Call::Dispatch]);
        let (request, options) = recorder.last_sent();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, Url::parse("https://example.com/a?b=c").unwrap());
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
        assert_eq!(options.completion, CompletionOption::ResponseHeadersRead);

        token.cancel();
        assert!(options.cancellation.unwrap().is_cancelled());
        assert_eq!(
            recorder.headers.lock().get(ACCEPT).unwrap(),
            "text/html, application/xhtml+xml, */*"
        );
    }

    #[tokio::test]
    async fn test_send_forwards_request_untouched() {
        let recorder = Recorder::default();
        let request = Request::new(Method::PATCH, "https://example.com/item/1")
            .unwrap()
            .header("x-request-id", "42")
            .body("patch");

        assert_ok!(recorder.send_as(request.clone(), SendOptions::new(), Browser::Safari).await);

        assert_eq!(recorder.calls(), vec![Call::Apply, Call::Dispatch]);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, request.method);
        assert_eq!(sent.url, request.url);
        assert_eq!(sent.headers, request.headers);
        assert_eq!(sent.body, request.body);
    }

    #[tokio::test]
    async fn test_verbs_with_bodies() {
        let recorder = Recorder::default();

        let options = SendOptions::new();
        assert_ok!(recorder.post_as("https://example.com/p", "one", options, Browser::Opera).await);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.body.as_deref(), Some(&b"one"[..]));

        let body = vec![1u8, 2];
        let options = SendOptions::new();
        assert_ok!(recorder.put_as("https://example.com/p", body, options, Browser::Opera).await);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.body.as_deref(), Some(&[1u8, 2][..]));

        let options = SendOptions::new();
        assert_ok!(recorder.delete_as("https://example.com/p", options, Browser::Opera).await);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, Method::DELETE);

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Apply,
                Call::Dispatch,
                Call::Apply,
                Call::Dispatch,
                Call::Apply,
                Call::Dispatch
            ]
        );
    }

    #[tokio::test]
    async fn test_json_and_formatted_bodies() {
        let recorder = Recorder::default();
        let value = serde_json::json!({ "name": "widget", "size": 2 });

        let options = SendOptions::new();
        let url = "https://example.com/j";
        assert_ok!(recorder.post_json_as(url, &value, options, Browser::Chrome).await);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(sent.body.as_deref(), Some(&br#"{"name":"widget","size":2}"#[..]));

        assert_ok!(
            recorder
                .put_formatted_as(
                    "https://example.com/f",
                    &value,
                    &FormFormatter,
                    Some("application/x-www-form-urlencoded; charset=utf-8"),
                    SendOptions::new(),
                    Browser::Chrome,
                )
                .await
        );
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(
            sent.headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded; charset=utf-8"
        );
        assert_eq!(sent.body.as_deref(), Some(&b"name=widget&size=2"[..]));

        assert_eq!(recorder.calls().iter().filter(|c| **c == Call::Apply).count(), 2);
    }

    #[derive(Serialize)]
    struct Widget {
        name: &'static str,
        size: u32,
    }

    #[tokio::test]
    async fn test_xml_bodies() {
        let recorder = Recorder::default();
        let widget = Widget {
            name: "gear",
            size: 2,
        };

        let url = "https://example.com/x";
        let options = SendOptions::new();
        assert_ok!(recorder.post_xml_as(url, &widget, options, Browser::Opera).await);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/xml");
        assert_eq!(
            sent.body.as_deref(),
            Some(&b"<Widget><name>gear</name><size>2</size></Widget>"[..])
        );

        let options = SendOptions::new();
        assert_ok!(recorder.put_xml_as(url, &widget, options, Browser::Opera).await);
        let (sent, _) = recorder.last_sent();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.headers.get(CONTENT_TYPE).unwrap(), "application/xml");

        assert_eq!(
            recorder.calls(),
            vec![Call::Apply, Call::Dispatch, Call::Apply, Call::Dispatch]
        );
        assert_eq!(
            recorder.headers.lock().get(ACCEPT).unwrap(),
            "text/html, application/xml;q=0.9, application/xhtml+xml, image/png, image/webp, image/jpeg, image/gif, image/x-xbitmap, */*;q=0.1"
        );
    }

    #[tokio::test]
    async fn test_invalid_url_still_applies_once() {
        let recorder = Recorder::default();

        let result = recorder.get_as("no scheme", SendOptions::new(), Browser::Firefox).await;
        let err = assert_err!(result);
        assert!(matches!(err, Error::Url(_)));
        assert_eq!(recorder.calls(), vec![Call::Apply]);
    }

    #[tokio::test]
    async fn test_format_error_does_not_dispatch() {
        let recorder = Recorder::default();

        let result = recorder
            .post_formatted_as(
                "https://example.com/f",
                &vec!["not", "an", "object"],
                &FormFormatter,
                None,
                SendOptions::new(),
                Browser::Firefox,
            )
            .await;
        assert!(matches!(result, Err(Error::Format(_))));
        assert_eq!(recorder.calls(), vec![Call::Apply]);
    }

    #[tokio::test]
    async fn test_accept_charset_persists_on_client() {
        let recorder = Recorder::default();
        recorder
            .headers
            .lock()
            .insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8"));

        recorder.impersonate(Browser::Firefox);
        assert_eq!(recorder.headers.lock().get(ACCEPT_CHARSET).unwrap(), "utf-8");

        recorder.impersonate(Browser::Chrome);
        recorder.impersonate(Browser::Safari);
        assert_eq!(
            recorder.headers.lock().get(ACCEPT_CHARSET).unwrap(),
            "ISO-8859-1,utf-8;q=0.7,*;q=0.3"
        );
    }

    #[tokio::test]
    async fn test_body_helpers() {
        let recorder = Recorder::default();
        let text = recorder
            .get_string_as("https://example.com/t", SendOptions::new(), Browser::IE6)
            .await
            .unwrap();
        assert_eq!(text, "recorded");

        let bytes = recorder
            .get_bytes_as("https://example.com/t", SendOptions::new(), Browser::IE6)
            .await
            .unwrap();
        assert_eq!(bytes, Bytes::from_static(b"recorded"));

        let options = SendOptions::new();
        assert_ok!(recorder.get_stream_as("https://example.com/s", options, Browser::IE6).await);
        let (_, options) = recorder.last_sent();
        assert_eq!(options.completion, CompletionOption::ResponseHeadersRead);
        assert_eq!(recorder.calls().len(), 6);
    }

    #[tokio::test]
    async fn test_body_helpers_reject_error_status() {
        let recorder = Recorder::with_status(StatusCode::NOT_FOUND);
        let err = recorder
            .get_string_as("https://example.com/missing", SendOptions::new(), Browser::Maxthon)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_client_error());
    }
}
