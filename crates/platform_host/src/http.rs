//! HTTP service contracts used by apps that talk to remote endpoints, plus test adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object-safe boxed future used by [`HttpService`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One multipart/form-data field.
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
}

impl FormField {
    /// Creates a form field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Host service for JSON reads and form submissions.
pub trait HttpService {
    /// Issues a GET request and decodes the JSON response body.
    fn get_json<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<Value, String>>;

    /// Posts `fields` as form data and decodes the JSON response body.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        fields: &'a [FormField],
    ) -> HttpFuture<'a, Result<Value, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// HTTP service for targets without network access.
pub struct NoopHttpService;

impl HttpService for NoopHttpService {
    fn get_json<'a>(&'a self, _url: &'a str) -> HttpFuture<'a, Result<Value, String>> {
        Box::pin(async { Err("http is unavailable on this host".to_string()) })
    }

    fn post_form<'a>(
        &'a self,
        _url: &'a str,
        _fields: &'a [FormField],
    ) -> HttpFuture<'a, Result<Value, String>> {
        Box::pin(async { Err("http is unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One form submission captured by [`MemoryHttpService`].
pub struct RecordedPost {
    /// Target URL.
    pub url: String,
    /// Submitted fields in order.
    pub fields: Vec<FormField>,
}

#[derive(Debug, Default)]
struct MemoryHttpState {
    get_responses: HashMap<String, Result<Value, String>>,
    post_response: Option<Result<Value, String>>,
    requested_urls: Vec<String>,
    posts: Vec<RecordedPost>,
}

#[derive(Debug, Clone, Default)]
/// In-memory HTTP service with canned responses and recorded requests.
///
/// Unknown GET URLs fail with a 404-style error. Posts succeed with `null` unless a response was
/// configured through [`MemoryHttpService::respond_to_posts`].
pub struct MemoryHttpService {
    inner: Rc<RefCell<MemoryHttpState>>,
}

impl MemoryHttpService {
    /// Configures the response returned for GET requests to `url`.
    pub fn respond_to_get(&self, url: impl Into<String>, response: Result<Value, String>) {
        self.inner
            .borrow_mut()
            .get_responses
            .insert(url.into(), response);
    }

    /// Configures the response returned for every form post.
    pub fn respond_to_posts(&self, response: Result<Value, String>) {
        self.inner.borrow_mut().post_response = Some(response);
    }

    /// Returns every GET URL requested so far.
    pub fn requested_urls(&self) -> Vec<String> {
        self.inner.borrow().requested_urls.clone()
    }

    /// Returns every form post submitted so far.
    pub fn posts(&self) -> Vec<RecordedPost> {
        self.inner.borrow().posts.clone()
    }
}

impl HttpService for MemoryHttpService {
    fn get_json<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<Value, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.requested_urls.push(url.to_string());
            state
                .get_responses
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(format!("request failed with status 404: {url}")))
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        fields: &'a [FormField],
    ) -> HttpFuture<'a, Result<Value, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.posts.push(RecordedPost {
                url: url.to_string(),
                fields: fields.to_vec(),
            });
            state.post_response.clone().unwrap_or(Ok(Value::Null))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn memory_service_serves_canned_gets_and_records_urls() {
        let http = MemoryHttpService::default();
        http.respond_to_get("https://example.test/a", Ok(json!({ "ok": true })));
        let service: &dyn HttpService = &http;

        assert_eq!(
            block_on(service.get_json("https://example.test/a")),
            Ok(json!({ "ok": true }))
        );
        assert!(block_on(service.get_json("https://example.test/missing")).is_err());
        assert_eq!(
            http.requested_urls(),
            vec![
                "https://example.test/a".to_string(),
                "https://example.test/missing".to_string()
            ]
        );
    }

    #[test]
    fn memory_service_records_posts() {
        let http = MemoryHttpService::default();
        http.respond_to_posts(Err("boom".to_string()));
        let fields = vec![FormField::new("name", "Ada")];

        let result = block_on(http.post_form("https://example.test/form", &fields));

        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(
            http.posts(),
            vec![RecordedPost {
                url: "https://example.test/form".to_string(),
                fields,
            }]
        );
    }

    #[test]
    fn noop_service_rejects_requests() {
        assert!(block_on(NoopHttpService.get_json("https://example.test")).is_err());
    }
}
