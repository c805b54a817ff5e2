//! Interactive table: redraw, pick an action, apply it, repeat.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use chrono::Local;
use inquire::{CustomType, InquireError, Select, Text};
use roster_business::{AdminTable, DocumentStore, Notice, SortField, TableEvent, TableView};
use roster_clipboard::ClipboardProvider;
use tracing::{debug, instrument};

use super::export::export_table;
use crate::output::Output;
use crate::render;

/// Menu entries; only those that make sense for the current view are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Search,
    Sort,
    NextPage,
    PreviousPage,
    GoToPage,
    CopyRow,
    CopyAll,
    Export,
    Reload,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Search => "Search",
            Self::Sort => "Sort by column",
            Self::NextPage => "Next page",
            Self::PreviousPage => "Previous page",
            Self::GoToPage => "Go to page",
            Self::CopyRow => "Copy one email",
            Self::CopyAll => "Copy all emails",
            Self::Export => "Export CSV",
            Self::Reload => "Reload",
            Self::Quit => "Quit",
        })
    }
}

/// Menu for `view`.
pub fn menu(view: &TableView) -> Vec<MenuItem> {
    if view.body.offers_retry() {
        return vec![MenuItem::Reload, MenuItem::Quit];
    }

    let mut items = vec![MenuItem::Search, MenuItem::Sort];
    if view.pagination.next_enabled {
        items.push(MenuItem::NextPage);
    }
    if view.pagination.previous_enabled {
        items.push(MenuItem::PreviousPage);
    }
    if view.pagination.total_pages > 1 {
        items.push(MenuItem::GoToPage);
    }
    if !view.body.rows().is_empty() {
        items.push(MenuItem::CopyRow);
    }
    items.extend([
        MenuItem::CopyAll,
        MenuItem::Export,
        MenuItem::Reload,
        MenuItem::Quit,
    ]);
    items
}

/// A resolved user choice, prompts already answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Event(TableEvent),
    CopyRow(usize),
    CopyAll,
    Export,
    Reload,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Redraw, showing the notice if any.
    Continue(Option<Notice>),
    Quit,
}

/// Applies `step` to the table; `draw` shows the loading screen during a reload.
pub async fn apply_step(
    table: &mut AdminTable,
    step: Step,
    store: &dyn DocumentStore,
    clipboard: &dyn ClipboardProvider,
    export_dir: &Path,
    draw: &dyn Fn(&TableView),
) -> Flow {
    debug!("browse step: {step:?}");
    let notice = match step {
        Step::Event(event) => {
            table.apply(event);
            None
        }
        Step::CopyRow(number) => Some(table.copy_row(number, clipboard)),
        Step::CopyAll => Some(table.copy_all(clipboard)),
        Step::Export => {
            let (notice, path) = export_table(table, None, Some(export_dir));
            Some(match path {
                Some(path) => Notice::success(format!("{notice} ({})", path.display())),
                None => notice,
            })
        }
        Step::Reload => reload(table, store, draw).await,
        Step::Quit => return Flow::Quit,
    };
    Flow::Continue(notice)
}

/// Refetches into `table`, drawing the placeholder first.
async fn reload(
    table: &mut AdminTable,
    store: &dyn DocumentStore,
    draw: &dyn Fn(&TableView),
) -> Option<Notice> {
    table
        .load_with(store, |pending| draw(&pending.render(&Local::now())))
        .await
}

/// `Ok(None)` when the prompt was skipped with Esc or interrupted with Ctrl-C.
fn skippable<T>(result: Result<Option<T>, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Prompt failed"),
    }
}

/// Asks the follow-up questions for `item`; `None` when the user backed out.
fn prompt_step(item: MenuItem, table: &AdminTable, view: &TableView) -> Result<Option<Step>> {
    let step = match item {
        MenuItem::Search => skippable(
            Text::new("Search:")
                .with_initial_value(table.query().search())
                .with_help_message("Matches email or name; empty shows everyone")
                .prompt_skippable(),
        )?
        .map(|term| Step::Event(TableEvent::Search(term))),
        MenuItem::Sort => {
            let sort = table.query().sort();
            let start = SortField::ALL
                .iter()
                .position(|&field| field == sort.field)
                .unwrap_or_default();
            skippable(
                Select::new("Sort by:", SortField::ALL.to_vec())
                    .with_starting_cursor(start)
                    .with_help_message("Picking the current column flips the direction")
                    .prompt_skippable(),
            )?
            .map(|field| Step::Event(TableEvent::Sort(field)))
        }
        MenuItem::NextPage => Some(Step::Event(TableEvent::NextPage)),
        MenuItem::PreviousPage => Some(Step::Event(TableEvent::PreviousPage)),
        MenuItem::GoToPage => skippable(
            CustomType::<usize>::new("Page:")
                .with_help_message(&format!("1 to {}", view.pagination.total_pages))
                .prompt_skippable(),
        )?
        .map(|page| Step::Event(TableEvent::GoToPage(page))),
        MenuItem::CopyRow => skippable(
            CustomType::<usize>::new("Row number:")
                .with_help_message(&format!("1 to {}", view.body.rows().len()))
                .prompt_skippable(),
        )?
        .map(Step::CopyRow),
        MenuItem::CopyAll => Some(Step::CopyAll),
        MenuItem::Export => Some(Step::Export),
        MenuItem::Reload => Some(Step::Reload),
        MenuItem::Quit => Some(Step::Quit),
    };
    Ok(step)
}

#[instrument(skip_all, name = "browse")]
pub async fn run_browse(
    store: &dyn DocumentStore,
    clipboard: &dyn ClipboardProvider,
) -> Result<ExitCode> {
    let out = Output::new();
    let export_dir = PathBuf::from(".");
    let draw = |view: &TableView| {
        out.clear();
        out.print(render::screen(view));
    };

    let mut table = AdminTable::new();
    let mut notice = reload(&mut table, store, &draw).await;

    loop {
        let view = table.render(&Local::now());
        draw(&view);
        if let Some(notice) = notice.take() {
            out.notice(&notice);
        }

        let choice = match Select::new("Action:", menu(&view)).prompt_skippable() {
            Ok(Some(item)) => item,
            Ok(None) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                break;
            }
            Err(e) => return Err(e).context("Failed to read action"),
        };

        let Some(step) = prompt_step(choice, &table, &view)? else {
            continue;
        };

        match apply_step(&mut table, step, store, clipboard, &export_dir, &draw).await {
            Flow::Continue(next) => notice = next,
            Flow::Quit => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}
