//! Draws a [`TableView`] as terminal text.

use console::style;
use roster_business::view::{ColumnHeader, SortIndicator, TableBody};
use roster_business::{Summary, TableView};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Column header with its sort arrow.
pub fn header_label(column: &ColumnHeader) -> String {
    match column.indicator {
        SortIndicator::Ascending => format!("{} ▲", column.label),
        SortIndicator::Descending => format!("{} ▼", column.label),
        SortIndicator::Unsorted => column.label.to_owned(),
    }
}

pub fn summary_line(summary: &Summary) -> String {
    format!(
        "Total {} · Verified {} · Profile complete {} · Active today {}",
        summary.total, summary.verified, summary.profile_complete, summary.active_today
    )
}

/// The rows of the current page, or the body placeholder.
pub fn table_text(view: &TableView) -> String {
    let rows = match &view.body {
        TableBody::Rows(rows) => rows,
        TableBody::Failed { message, detail } => return format!("{message}\n{detail}"),
        body => return body.placeholder().unwrap_or_default().to_owned(),
    };

    let mut builder = Builder::default();
    let mut header = vec!["#".to_owned()];
    header.extend(view.columns.iter().map(header_label));
    header.push("Profile".to_owned());
    builder.push_record(header);

    for row in rows {
        builder.push_record([
            row.number.to_string(),
            row.email.clone(),
            row.display_name.clone(),
            row.joined.clone(),
            row.verified_badge().to_owned(),
            row.profile_badge().to_owned(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Page label plus a count of matches, e.g. `Page 1 of 2 (25 users)`.
pub fn footer_line(view: &TableView) -> String {
    let noun = if view.matching == 1 { "user" } else { "users" };
    let mut line = format!("{} ({} {noun})", view.pagination.label, view.matching);
    if !view.search.is_empty() {
        line.push_str(&format!(" matching \"{}\"", view.search));
    }
    line
}

/// Full screen: summary, table, footer.
pub fn screen(view: &TableView) -> String {
    format!(
        "{}\n{}\n{}",
        style(summary_line(&view.summary)).dim(),
        table_text(view),
        style(footer_line(view)).dim()
    )
}
