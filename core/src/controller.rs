//! View state and the transitions that drive it.
//!
//! # Design
//! `ViewController` owns every piece of UI state and exposes one method per
//! user action. Actions that need the network return an [`Outbound`]: a
//! sequence-numbered [`Ticket`] plus the `HttpRequest` to execute. The host
//! runs the request and hands the outcome back through
//! [`ViewController::complete`], which may answer with a follow-up refresh.
//!
//! The cached item list is only ever replaced wholesale by a list-all
//! response. A list-all response older than the newest one already applied
//! is dropped, so overlapping refreshes cannot roll the table back.
//!
//! Failures are logged and otherwise invisible: no action sets an error
//! message in the view.

use tracing::{debug, error, info};

use crate::client::CatalogClient;
use crate::error::{ApiError, ErrorKind};
use crate::http::{HttpRequest, HttpResponse};
use crate::search::{search, SearchOutcome};
use crate::types::{Item, ItemPayload};

pub const ITEM_ADDED: &str = "Item added successfully!";
pub const ITEM_UPDATED: &str = "Item updated successfully!";

/// The API operation a ticket stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Lookup,
    Create,
    Update,
    Delete,
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    operation: Operation,
    target: Option<String>,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Item id the request is about, when there is one.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// A request the host must execute, paired with its ticket.
#[derive(Debug, Clone)]
#[must_use = "the request must be executed and passed back to `complete`"]
pub struct Outbound {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// Unsaved add-form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    fn to_payload(&self) -> ItemPayload {
        ItemPayload {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Unsaved edit-form contents. The id is fixed when the modal opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl EditDraft {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> ItemPayload {
        ItemPayload {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Outcome of the latest get-by-id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Item),
    Missing(String),
}

/// Everything the view renders.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub items: Vec<Item>,
    pub search_text: String,
    pub search: SearchOutcome,
    pub add_draft: ItemDraft,
    pub edit_draft: EditDraft,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
    pub status_message: Option<String>,
    pub lookup: Option<Lookup>,
}

#[derive(Debug)]
pub struct ViewController {
    client: CatalogClient,
    state: ViewState,
    next_seq: u64,
    newest_list: u64,
    newest_lookup: u64,
}

impl ViewController {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
            next_seq: 0,
            newest_list: 0,
            newest_lookup: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Look an id up in the cached list.
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.state.items.iter().find(|item| item.id == id)
    }

    /// First fetch when the view is displayed.
    pub fn load(&mut self) -> Outbound {
        self.refresh()
    }

    /// Re-fetch the whole list.
    pub fn refresh(&mut self) -> Outbound {
        let request = self.client.build_list_items();
        self.issue(Operation::Refresh, None, request)
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.state.search_text = text.to_string();
    }

    /// Recompute search results from the cached list. Results are not
    /// updated again until the next explicit call.
    pub fn run_search(&mut self) {
        self.state.search = search(&self.state.items, &self.state.search_text);
    }

    pub fn open_add_modal(&mut self) {
        self.state.add_modal_open = true;
        self.state.status_message = None;
        self.state.add_draft = ItemDraft::default();
    }

    pub fn close_add_modal(&mut self) {
        self.state.add_modal_open = false;
    }

    pub fn set_add_name(&mut self, name: &str) {
        self.state.add_draft.name = name.to_string();
    }

    pub fn set_add_description(&mut self, description: &str) {
        self.state.add_draft.description = description.to_string();
    }

    /// Send the add draft as-is. No field is validated.
    pub fn submit_add(&mut self) -> Result<Outbound, ApiError> {
        let request = self.client.build_create_item(&self.state.add_draft.to_payload())?;
        Ok(self.issue(Operation::Create, None, request))
    }

    pub fn open_edit_modal(&mut self, item: &Item) {
        self.state.edit_modal_open = true;
        self.state.status_message = None;
        self.state.edit_draft = EditDraft::from_item(item);
    }

    pub fn close_edit_modal(&mut self) {
        self.state.edit_modal_open = false;
    }

    pub fn set_edit_name(&mut self, name: &str) {
        self.state.edit_draft.name = name.to_string();
    }

    pub fn set_edit_description(&mut self, description: &str) {
        self.state.edit_draft.description = description.to_string();
    }

    pub fn submit_edit(&mut self) -> Result<Outbound, ApiError> {
        let draft = &self.state.edit_draft;
        let request = self.client.build_update_item(&draft.id, &draft.to_payload())?;
        let target = Some(draft.id.clone());
        Ok(self.issue(Operation::Update, target, request))
    }

    /// Delete without confirmation.
    pub fn delete_item(&mut self, id: &str) -> Outbound {
        let request = self.client.build_delete_item(id);
        self.issue(Operation::Delete, Some(id.to_string()), request)
    }

    pub fn lookup_item(&mut self, id: &str) -> Outbound {
        let request = self.client.build_get_item(id);
        self.issue(Operation::Lookup, Some(id.to_string()), request)
    }

    /// Apply a finished round trip. Returns the refresh to run next after a
    /// successful mutation.
    pub fn complete(&mut self, ticket: Ticket, response: Result<HttpResponse, ApiError>) -> Option<Outbound> {
        match ticket.operation {
            Operation::Refresh => {
                let parsed = response.and_then(|r| self.client.parse_list_items(r));
                self.apply_list(ticket.seq, parsed);
                None
            }
            Operation::Lookup => {
                let parsed = response.and_then(|r| self.client.parse_get_item(r));
                self.apply_lookup(ticket, parsed);
                None
            }
            Operation::Create => match response.and_then(|r| self.client.parse_create_item(r)) {
                Ok(item) => {
                    info!(id = %item.id, "item added");
                    self.state.status_message = Some(ITEM_ADDED.to_string());
                    self.state.add_draft = ItemDraft::default();
                    Some(self.refresh())
                }
                Err(e) => {
                    error!(error = %e, "error adding item");
                    None
                }
            },
            Operation::Update => match response.and_then(|r| self.client.parse_update_item(r)) {
                Ok(item) => {
                    info!(id = %item.id, "item updated");
                    self.state.status_message = Some(ITEM_UPDATED.to_string());
                    self.state.edit_draft = EditDraft::default();
                    Some(self.refresh())
                }
                Err(e) => {
                    error!(id = ?ticket.target, error = %e, "error updating item");
                    None
                }
            },
            Operation::Delete => match response.and_then(|r| self.client.parse_delete_item(r)) {
                Ok(()) => {
                    info!(id = ?ticket.target, "item deleted");
                    Some(self.refresh())
                }
                Err(e) => {
                    error!(id = ?ticket.target, error = %e, "error deleting item");
                    None
                }
            },
        }
    }

    fn issue(&mut self, operation: Operation, target: Option<String>, request: HttpRequest) -> Outbound {
        self.next_seq += 1;
        debug!(seq = self.next_seq, ?operation, method = %request.method, url = %request.url, "request issued");
        Outbound {
            ticket: Ticket {
                seq: self.next_seq,
                operation,
                target,
            },
            request,
        }
    }

    fn apply_list(&mut self, seq: u64, parsed: Result<Vec<Item>, ApiError>) {
        match parsed {
            Ok(_) if seq <= self.newest_list => {
                debug!(seq, newest = self.newest_list, "dropping stale item list");
            }
            Ok(items) => {
                debug!(seq, count = items.len(), "item list refreshed");
                self.newest_list = seq;
                self.state.items = items;
            }
            Err(e) => error!(seq, error = %e, "error fetching items"),
        }
    }

    fn apply_lookup(&mut self, ticket: Ticket, parsed: Result<Item, ApiError>) {
        if ticket.seq <= self.newest_lookup {
            debug!(seq = ticket.seq, "dropping stale lookup");
            return;
        }
        match parsed {
            Ok(item) => {
                self.newest_lookup = ticket.seq;
                self.state.lookup = Some(Lookup::Found(item));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.newest_lookup = ticket.seq;
                self.state.lookup = Some(Lookup::Missing(ticket.target.unwrap_or_default()));
            }
            Err(e) => error!(id = ?ticket.target, kind = ?e.kind(), error = %e, "error looking up item"),
        }
    }
}
