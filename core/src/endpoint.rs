//! Generic CRUD endpoint over one REST resource.
//!
//! # Design
//! `Endpoint` holds only its `RequestSpec` and a `Transport`; nothing changes
//! between calls. Every operation comes in two forms: `*_with_status` issues
//! the request and asserts a caller-chosen status, returning the
//! `ValidatedResponse` undecoded, and the plain form calls it with the
//! default status and decodes the body. Request building therefore lives in
//! exactly one place per verb.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use url::Url;

use crate::config::RequestSpec;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, Transport, UreqTransport};
use crate::response::ValidatedResponse;
use crate::status::HttpStatus;

/// Describes one REST resource: its paths and the DTO on the wire.
pub trait Resource {
    type Dto: Serialize + DeserializeOwned;

    /// Display name used in log lines, e.g. `"Comment"`.
    const NAME: &'static str;
    /// Collection path, e.g. `/comments`.
    const COLLECTION: &'static str;
    /// Item path template with a single `{param}` placeholder.
    const ITEM: &'static str;
}

pub struct Endpoint<R, T = UreqTransport> {
    spec: RequestSpec,
    transport: T,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Endpoint<R> {
    /// Endpoint over a blocking `ureq` transport using the spec's timeout.
    pub fn new(spec: RequestSpec) -> Self {
        let transport = UreqTransport::from_spec(&spec);
        Self::with_transport(spec, transport)
    }
}

impl<R: Resource, T: Transport> Endpoint<R, T> {
    pub fn with_transport(spec: RequestSpec, transport: T) -> Self {
        Self {
            spec,
            transport,
            resource: PhantomData,
        }
    }

    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST the dto and decode the created resource. Expects 201.
    pub fn create(&self, dto: &R::Dto) -> Result<R::Dto> {
        self.create_with_status(dto, HttpStatus::Created)?.extract()
    }

    pub fn create_with_status(&self, dto: &R::Dto, expected: HttpStatus) -> Result<ValidatedResponse> {
        info!("Create new {}", R::NAME);
        let request = self.build_request(HttpMethod::Post, self.collection_url(), Some(dto))?;
        self.send(request, expected)
    }

    /// PUT the dto over the resource at `id`. Expects 200.
    pub fn update(&self, id: impl fmt::Display, dto: &R::Dto) -> Result<R::Dto> {
        self.update_with_status(dto, id, HttpStatus::Ok)?.extract()
    }

    pub fn update_with_status(
        &self,
        dto: &R::Dto,
        id: impl fmt::Display,
        expected: HttpStatus,
    ) -> Result<ValidatedResponse> {
        let url = self.item_url(&id);
        info!(id = %id, "Update {} by id", R::NAME);
        let request = self.build_request(HttpMethod::Put, url, Some(dto))?;
        self.send(request, expected)
    }

    /// GET the resource at `id`. Expects 200.
    pub fn get_by_id(&self, id: impl fmt::Display) -> Result<R::Dto> {
        self.get_by_id_with_status(id, HttpStatus::Ok)?.extract()
    }

    pub fn get_by_id_with_status(
        &self,
        id: impl fmt::Display,
        expected: HttpStatus,
    ) -> Result<ValidatedResponse> {
        let url = self.item_url(&id);
        info!(id = %id, "Get {} by id", R::NAME);
        let request = self.build_request(HttpMethod::Get, url, None)?;
        self.send(request, expected)
    }

    /// GET the whole collection, in the order the server returns it.
    pub fn get_all(&self) -> Result<Vec<R::Dto>> {
        self.get_all_with_status(HttpStatus::Ok)?.extract()
    }

    pub fn get_all_with_status(&self, expected: HttpStatus) -> Result<ValidatedResponse> {
        info!("Get all {}s", R::NAME);
        let request = self.build_request(HttpMethod::Get, self.collection_url(), None)?;
        self.send(request, expected)
    }

    /// DELETE the resource at `id`. Expects 200.
    pub fn delete(&self, id: impl fmt::Display) -> Result<()> {
        self.delete_with_status(id, HttpStatus::Ok).map(|_| ())
    }

    pub fn delete_with_status(
        &self,
        id: impl fmt::Display,
        expected: HttpStatus,
    ) -> Result<ValidatedResponse> {
        let url = self.item_url(&id);
        info!(id = %id, "Delete {} by id", R::NAME);
        let request = self.build_request(HttpMethod::Delete, url, None)?;
        self.send(request, expected)
    }

    fn collection_url(&self) -> Url {
        self.spec.url(R::COLLECTION.split('/').filter(|s| !s.is_empty()))
    }

    /// Item URL with the template's `{param}` segment replaced by `id`.
    fn item_url(&self, id: &dyn fmt::Display) -> Url {
        let id = id.to_string();
        let segments: Vec<String> = R::ITEM
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('{') && s.ends_with('}') {
                    id.clone()
                } else {
                    s.to_string()
                }
            })
            .collect();
        self.spec.url(segments)
    }

    fn build_request(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<&R::Dto>,
    ) -> Result<HttpRequest> {
        let mut headers = self.spec.headers().to_vec();
        let body = match body {
            Some(dto) => {
                let json = serde_json::to_string(dto)
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?;
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(json)
            }
            None => None,
        };
        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    fn send(&self, request: HttpRequest, expected: HttpStatus) -> Result<ValidatedResponse> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.execute(request)?;
        ValidatedResponse::check(response, expected, method, &url)
    }
}

impl<R, T: Clone> Clone for Endpoint<R, T> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            transport: self.transport.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource, T: fmt::Debug> fmt::Debug for Endpoint<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("resource", &R::NAME)
            .field("spec", &self.spec)
            .field("transport", &self.transport)
            .finish()
    }
}
