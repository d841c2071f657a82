use crate::commands::{CmdMessage, CmdResult, ListQuery, PageSummary};
use crate::error::Result;
use crate::store::DataStore;
use crate::view::{BookListView, SortColumn, SortState};
use std::num::NonZeroUsize;

pub fn run<S: DataStore>(
    store: &S,
    user: &str,
    page_size: NonZeroUsize,
    query: ListQuery,
) -> Result<CmdResult> {
    let books = store.fetch_books(user)?;
    let mut view = BookListView::new(books, page_size);
    let mut result = CmdResult::default();

    view.select_status(query.status);
    if let Some(search) = query.search {
        view.set_search(search);
    }

    match (query.sort_column.as_deref(), query.direction) {
        (Some(column_id), None) => {
            if !view.toggle_sort(column_id) {
                result.add_message(unknown_column(column_id));
            }
        }
        (Some(column_id), Some(direction)) => match column_id.parse::<SortColumn>() {
            Ok(column) => view.set_sort(SortState::new(column, direction)),
            Err(_) => result.add_message(unknown_column(column_id)),
        },
        (None, Some(direction)) => view.set_sort(SortState::new(view.sort().column, direction)),
        (None, None) => {}
    }

    if let Some(page) = query.page {
        if !view.go_to_page(page) {
            let range = match view.total_pages() {
                0 => "no matching books".to_string(),
                1 => "only page 1 exists".to_string(),
                n => format!("pages 1-{}", n),
            };
            result.add_message(CmdMessage::warning(format!(
                "Page {} is out of range ({}), showing page {}",
                page,
                range,
                view.current_page()
            )));
        }
    }

    let summary = PageSummary {
        status: view.filter().status.clone(),
        query: view.filter().query.clone(),
        sort: view.sort(),
        current_page: view.current_page(),
        total_pages: view.total_pages(),
        info: view.pagination_info(),
        buttons: view.pagination_buttons(),
    };

    Ok(result
        .with_listed_books(view.page_rows().to_vec())
        .with_counts(view.status_counts())
        .with_page(summary))
}

fn unknown_column(column_id: &str) -> CmdMessage {
    let known: Vec<&str> = SortColumn::ALL.iter().map(|c| c.id()).collect();
    CmdMessage::warning(format!(
        "Unknown sort column '{}' (expected one of: {}), keeping current order",
        column_id,
        known.join(", ")
    ))
}
