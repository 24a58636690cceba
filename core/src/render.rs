//! Text rendering of a [`ViewState`].
//!
//! The page is rebuilt from scratch on every call; nothing is cached between
//! renders.

use unicode_width::UnicodeWidthStr;

use crate::controller::{Lookup, ViewState};
use crate::types::Item;

pub const TITLE: &str = "REST API Frontend";
pub const SEARCH_PLACEHOLDER: &str = "Enter item ID, name, or description";
pub const NO_MATCHES: &str = "No items match your search criteria.";

const ITEM_HEADERS: [&str; 3] = ["ID", "Name", "Description"];

/// Render the whole page.
pub fn render(state: &ViewState) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];

    if state.search_text.is_empty() {
        lines.push(format!("Search: ({SEARCH_PLACEHOLDER})"));
    } else {
        lines.push(format!("Search: {}", state.search_text));
    }

    let results = state.search.results();
    if !results.is_empty() {
        lines.push(String::new());
        lines.push("Search Results:".to_string());
        lines.extend(item_table(results));
    } else if state.search.shows_no_match_notice() {
        lines.push(String::new());
        lines.push(format!("! {NO_MATCHES}"));
    }

    lines.push(String::new());
    lines.push("Items List".to_string());
    lines.extend(item_table(&state.items));

    match &state.lookup {
        Some(Lookup::Found(item)) => {
            lines.push(String::new());
            lines.push(format!("Item {}:", item.id));
            lines.extend(item_table(std::slice::from_ref(item)));
        }
        Some(Lookup::Missing(id)) => {
            lines.push(String::new());
            lines.push(format!("No item with id {id}."));
        }
        None => {}
    }

    if state.add_modal_open {
        lines.push(String::new());
        lines.push("== Add New Item ==".to_string());
        push_status(&mut lines, state);
        lines.push(format!("Name:        {}", state.add_draft.name));
        lines.push(format!("Description: {}", state.add_draft.description));
        lines.push("[save] Add Item   [cancel]".to_string());
    }

    if state.edit_modal_open {
        lines.push(String::new());
        lines.push("== Update Item ==".to_string());
        push_status(&mut lines, state);
        lines.push(format!("ID:          {}", state.edit_draft.id));
        lines.push(format!("Name:        {}", state.edit_draft.name));
        lines.push(format!("Description: {}", state.edit_draft.description));
        lines.push("[save] Update Item   [cancel]".to_string());
    }

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

fn push_status(lines: &mut Vec<String>, state: &ViewState) {
    if let Some(message) = &state.status_message {
        lines.push(format!("* {message}"));
    }
}

fn item_table(items: &[Item]) -> Vec<String> {
    let rows: Vec<[&str; 3]> = items
        .iter()
        .map(|item| [item.id.as_str(), item.name.as_str(), item.display_description()])
        .collect();
    table(&ITEM_HEADERS, &rows)
}

/// Lay out `rows` under `headers` with columns padded to display width.
fn table<const N: usize>(headers: &[&str; N], rows: &[[&str; N]]) -> Vec<String> {
    let mut widths = headers.map(|header| header.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let line = |cells: &[&str; N]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell}{}", " ".repeat(width - cell.width())))
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(rows.iter().map(line));
    out
}
