use std::fmt::Write;

use crate::domain::entities::comment::User;
use crate::domain::entities::filter::PageSize;
use crate::usecase::services::dashboard_service::{DashboardView, LoadError};

const BODY_PREVIEW_CHARS: usize = 60;

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut = flat.chars().take(max_chars.saturating_sub(1)).collect::<String>();
    cut.push('…');
    cut
}

pub fn render_dashboard(user: &User, view: &DashboardView) -> String {
    let mut out = String::new();
    let page = &view.page;

    let _ = writeln!(out, "[{}] {}", user.initials(), user.name);
    let _ = writeln!(
        out,
        "Comments: {} total, {} filtered",
        view.total_comments, page.total_filtered
    );
    if !view.search.trim().is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", view.search);
    }

    let sort_line = view
        .sort_indicators
        .iter()
        .map(|(key, indicator)| format!("{} {}", key.label(), indicator.glyph()))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "Sort: {sort_line}");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:>7}  {:<30}  {:<28}  {}",
        "Post ID", "Name", "Email", "Comment"
    );
    for comment in &page.data {
        let _ = writeln!(
            out,
            "{:>7}  {:<30}  {:<28}  {}",
            comment.post_id,
            truncate_chars(&comment.name, 30),
            truncate_chars(&comment.email, 28),
            truncate_chars(&comment.body, BODY_PREVIEW_CHARS)
        );
    }
    if page.data.is_empty() {
        let _ = writeln!(out, "(no comments)");
    }

    let _ = writeln!(out);
    let window = view
        .window
        .iter()
        .map(|n| {
            if *n == page.page {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let sizes = PageSize::OPTIONS
        .iter()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join("/");
    let _ = writeln!(
        out,
        "{}  |  {} {} {}  |  {} per page ({sizes})",
        view.range,
        if page.has_previous() { "<" } else { " " },
        window,
        if page.has_next() { ">" } else { " " },
        page.page_size
    );

    out
}

pub fn render_profile(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", user.initials(), user.name);
    let _ = writeln!(out, "{}", user.email);
    let _ = writeln!(out);
    let rows = [
        ("User ID", user.id.to_string()),
        ("Username", user.username.clone()),
        ("Email", user.email.clone()),
        ("Phone", user.phone.clone()),
        ("Address", user.one_line_address()),
        ("Company", user.company.name.clone()),
        ("Website", format!("https://{}", user.website)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<10} {value}");
    }
    out
}

/// Load failures show only their own message; the cause stays in the logs.
pub fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LoadError>() {
        Some(load) => load.to_string(),
        None => format!("{err:#}"),
    }
}
