//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only the server origin and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The host executes the round trip in between.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemPayload};

/// Origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Fixed path prefix of every endpoint.
pub const API_PREFIX: &str = "/api";

/// Characters escaped when an id is placed in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(origin: &str) -> Self {
        Self {
            base_url: format!("{}{API_PREFIX}", origin.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/getall", self.base_url))
    }

    pub fn build_get_item(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/{}", self.base_url, segment(id)))
    }

    pub fn build_create_item(&self, input: &ItemPayload) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, format!("{}/add", self.base_url), input)
    }

    pub fn build_update_item(&self, id: &str, input: &ItemPayload) -> Result<HttpRequest, ApiError> {
        self.with_json(
            HttpMethod::Put,
            format!("{}/update/{}", self.base_url, segment(id)),
            input,
        )
    }

    pub fn build_delete_item(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("{}/delete/{}", self.base_url, segment(id)))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    /// The delete endpoint may answer with any body; only the status counts.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn bare(&self, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(&self, method: HttpMethod, url: String, input: &ItemPayload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// Any 2xx is success; 404 is `NotFound`; everything else is `HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn client() -> CatalogClient {
        CatalogClient::new("http://localhost:5000")
    }

    fn payload(name: &str, description: &str) -> ItemPayload {
        ItemPayload {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:5000/api/getall");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_item_uses_bare_id_path() {
        let req = client().build_get_item("64f1c0ffee");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:5000/api/64f1c0ffee");
    }

    #[test]
    fn ids_are_escaped_as_one_segment() {
        let req = client().build_delete_item("a/b c");
        assert_eq!(req.url, "http://localhost:5000/api/delete/a%2Fb%20c");
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let req = client().build_create_item(&payload("Pen", "Blue")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:5000/api/add");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Pen");
        assert_eq!(body["description"], "Blue");
    }

    #[test]
    fn build_create_item_sends_empty_name_as_is() {
        let req = client().build_create_item(&payload("", "")).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "");
    }

    #[test]
    fn build_update_item_targets_update_path() {
        let req = client().build_update_item("42", &payload("Pencil", "")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:5000/api/update/42");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Pencil");
        assert_eq!(body["description"], "");
    }

    #[test]
    fn build_delete_item_has_no_body() {
        let req = client().build_delete_item("42");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:5000/api/delete/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CatalogClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.build_list_items().url, "http://localhost:5000/api/getall");
    }

    #[test]
    fn parse_list_items_keeps_server_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"_id":"2","name":"B"},{"_id":"1","name":"A","description":"x"}]"#,
        );
        let items = client().parse_list_items(response).unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn parse_get_item_not_found() {
        let err = client().parse_get_item(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn parse_create_item_accepts_200_and_201() {
        let body = r#"{"_id":"9","name":"New","description":""}"#;
        for status in [200, 201] {
            let item = client().parse_create_item(HttpResponse::new(status, body)).unwrap();
            assert_eq!(item.id, "9");
        }
    }

    #[test]
    fn parse_create_item_server_error() {
        let err = client()
            .parse_create_item(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(err.kind(), ErrorKind::Status);
    }

    #[test]
    fn parse_update_item_success() {
        let response = HttpResponse::new(200, r#"{"_id":"9","name":"Updated","description":"d"}"#);
        let item = client().parse_update_item(response).unwrap();
        assert_eq!(item.name, "Updated");
    }

    #[test]
    fn parse_delete_item_ignores_body() {
        let c = client();
        assert!(c.parse_delete_item(HttpResponse::new(200, r#"{"message":"deleted"}"#)).is_ok());
        assert!(c.parse_delete_item(HttpResponse::new(204, "")).is_ok());
        assert!(c.parse_delete_item(HttpResponse::new(200, "not json")).is_ok());
    }

    #[test]
    fn parse_delete_item_not_found() {
        let err = client().parse_delete_item(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }
}
