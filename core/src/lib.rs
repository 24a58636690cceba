//! Sans-I/O client core for the item catalog.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the whole view
//! state of the catalog front end in one controller. The host executes the
//! round trips and prints what [`render::render`] produces.
//!
//! # Design
//! - `CatalogClient` is stateless; it holds only the API base URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `ViewController` turns user actions into sequence-numbered tickets and
//!   resynchronises the cached list after every successful mutation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod render;
pub mod search;
pub mod types;

pub use client::{CatalogClient, API_PREFIX, DEFAULT_ORIGIN};
pub use controller::{
    EditDraft, ItemDraft, Lookup, Operation, Outbound, Ticket, ViewController, ViewState, ITEM_ADDED, ITEM_UPDATED,
};
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use search::{search, SearchOutcome};
pub use types::{Item, ItemPayload, DESCRIPTION_PLACEHOLDER};
