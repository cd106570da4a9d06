//! Text rendering of checklist state for MCP responses

use crate::checklist::{ChecklistCategory, ChecklistDefinition, ChecklistItem, ChecklistStore};

/// Overall progress line, e.g. "BC Bid Readiness: 10% (2 of 21 items)"
pub fn format_overall(store: &ChecklistStore) -> String {
    let total = store.total_progress();
    let mut result = format!(
        "BC Bid Readiness: {}% ({} of {} items)",
        total.percent(),
        total.completed,
        total.total
    );
    if store.is_ready() {
        result.push_str("\nReady to bid on BC Bid!");
    }
    result
}

fn format_item(item: &ChecklistItem, checked: bool) -> String {
    let mut result = format!(
        "  [{}] {} ({})\n      {}\n",
        if checked { "x" } else { " " },
        item.label,
        item.id,
        item.description
    );

    if let (Some(url), Some(text)) = (&item.link, item.link_text()) {
        result.push_str(&format!("      {}: {}\n", text, url));
    }

    let mut details = Vec::new();
    if let Some(ref estimate) = item.estimated_time {
        details.push(format!("Time: {}", estimate));
    }
    if let Some(ref cost) = item.cost {
        details.push(format!("Cost: {}", cost));
    }
    if !details.is_empty() {
        result.push_str(&format!("      {}\n", details.join(" | ")));
    }

    result
}

/// Category header, plus its items when `show_items` is set
pub fn format_category(store: &ChecklistStore, category: &ChecklistCategory, show_items: bool) -> String {
    let progress = store.category_progress(category);
    let marker = if store.is_expanded(&category.id) { "v" } else { ">" };

    let mut result = format!(
        "{} {} [{}] {}{}\n  {}\n",
        marker,
        category.title,
        category.id,
        progress,
        if progress.is_complete() { " (complete)" } else { "" },
        category.description
    );

    if show_items {
        for item in &category.items {
            result.push_str(&format_item(item, store.is_checked(&item.id)));
        }
    }

    result
}

/// Full checklist; items are listed only for expanded categories
pub fn format_checklist(store: &ChecklistStore) -> String {
    let mut result = format_overall(store);
    result.push_str("\n\n");

    for category in &store.definition().categories {
        let expanded = store.is_expanded(&category.id);
        result.push_str(&format_category(store, category, expanded));
        result.push('\n');
    }

    result.trim_end().to_string()
}

/// Per-category counts under the overall line
pub fn format_progress(store: &ChecklistStore) -> String {
    let mut result = format_overall(store);
    result.push('\n');

    for category in &store.definition().categories {
        let progress = store.category_progress(category);
        result.push_str(&format!(
            "\n- {}: {} ({}%)",
            category.title,
            progress,
            progress.percent()
        ));
    }

    result
}

/// Quick links and help contacts
pub fn format_resources(definition: &ChecklistDefinition) -> String {
    if definition.quick_links.is_empty() && definition.help_contacts.is_empty() {
        return "No resources configured".to_string();
    }

    let mut result = String::new();

    if !definition.quick_links.is_empty() {
        result.push_str("Quick Links:\n");
        for link in &definition.quick_links {
            result.push_str(&format!("- {}: {}\n", link.label, link.url));
        }
    }

    if !definition.help_contacts.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str("Need Help?\n");
        for contact in &definition.help_contacts {
            let reach: Vec<&str> = [contact.email.as_deref(), contact.phone.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            result.push_str(&format!("- {}: {}\n", contact.name, reach.join(" | ")));
        }
    }

    result.trim_end().to_string()
}
