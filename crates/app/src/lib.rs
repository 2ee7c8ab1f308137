//! Minimal host for a SmartWaste session: renders the current page as JSON.

use serde_json::{Value, json};

use smartwaste_core::Clock;
use smartwaste_inventory::{Page, Session};

/// JSON view of the session's current page.
pub fn render<C: Clock>(session: &Session<C>) -> serde_json::Result<Value> {
    let page = session.current_page();
    let body = match page {
        Page::Dashboard => serde_json::to_value(session.dashboard())?,
        Page::Inventory => serde_json::to_value(session.ranked_inventory())?,
        Page::Logs => json!({
            "summary": serde_json::to_value(session.log_summary())?,
            "entries": serde_json::to_value(session.list_waste_log())?,
        }),
    };
    Ok(json!({ "page": page.as_str(), "view": body }))
}
