use super::*;
use crate::view_tests::record;
use shared::domain::{RequestRecord, RequestStatus, RequestType};

fn many(count: i64) -> Vec<RequestRecord> {
    (1..=count)
        .map(|id| {
            let status = if id % 2 == 0 {
                RequestStatus::Done
            } else {
                RequestStatus::InProgress
            };
            record(id, "Анна", RequestType::Defect, "01.03.2024", status)
        })
        .collect()
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(Pagination::new(0).total_pages(), 0);
    assert_eq!(Pagination::new(1).total_pages(), 1);
    assert_eq!(Pagination::new(12).total_pages(), 1);
    assert_eq!(Pagination::new(13).total_pages(), 2);
    assert_eq!(Pagination::new(25).total_pages(), 3);
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut pagination = Pagination::new(25);
    pagination.prev_page();
    assert_eq!(pagination.current_page(), 1);

    pagination.next_page();
    pagination.next_page();
    assert_eq!(pagination.current_page(), 3);
    pagination.next_page();
    assert_eq!(pagination.current_page(), 3);

    let mut empty = Pagination::new(0);
    empty.next_page();
    assert_eq!(empty.current_page(), 1);
    assert_eq!(empty.label(), "1 из 0");
}

#[test]
fn last_page_is_padded_to_a_full_page() {
    let rows = many(14);
    let mut pagination = Pagination::new(rows.len());
    assert_eq!(pagination.page_slice(&rows).len(), PAGE_SIZE);

    pagination.next_page();
    let slice = pagination.page_slice(&rows);
    assert_eq!(slice.len(), 2);
    assert_eq!(slice[0].id.0, 13);

    let padded = pagination.padded_rows(&rows);
    assert_eq!(padded.len(), PAGE_SIZE);
    assert_eq!(padded.iter().filter(|row| row.is_some()).count(), 2);
    assert_eq!(pagination.label(), "2 из 2");
}

#[test]
fn changing_filters_or_sort_returns_to_first_page() {
    let records = many(30);
    let mut table = TableView::new(&records);
    table.next_page();
    table.next_page();
    assert_eq!(table.pagination().current_page(), 3);

    table.set_status_filter(&records, RequestStatus::Done);
    assert_eq!(table.pagination().current_page(), 1);
    assert_eq!(table.rows().len(), 15);

    table.next_page();
    table.toggle_sort(&records, SortKey::Id);
    assert_eq!(table.pagination().current_page(), 1);
}

#[test]
fn reset_restores_unfiltered_unsorted_view() {
    let records = many(20);
    let mut table = TableView::new(&records);
    table.set_author_filter(&records, "Анна");
    table.set_status_filter(&records, RequestStatus::InProgress);
    table.toggle_sort(&records, SortKey::Id);
    table.toggle_sort(&records, SortKey::Id);
    table.next_page();

    table.reset(&records);
    assert_eq!(table.filters(), &Filters::default());
    assert_eq!(table.sort(), None);
    assert_eq!(table.pagination().current_page(), 1);
    assert_eq!(table.rows(), records.as_slice());
}

#[test]
fn empty_author_clears_the_filter() {
    let records = many(3);
    let mut table = TableView::new(&records);
    table.set_author_filter(&records, "Борис");
    assert!(table.rows().is_empty());

    table.set_author_filter(&records, "");
    assert_eq!(table.filters().author, None);
    assert_eq!(table.rows().len(), 3);
}

#[test]
fn clearing_one_filter_keeps_the_others() {
    let records = many(6);
    let mut table = TableView::new(&records);
    table.set_type_filter(&records, RequestType::Defect);
    table.set_status_filter(&records, RequestStatus::Done);
    assert_eq!(table.rows().len(), 3);

    table.clear_status_filter(&records);
    assert_eq!(table.filters().kind, Some(RequestType::Defect));
    assert_eq!(table.rows().len(), 6);
}

#[test]
fn paging_forward_stops_at_last_page() {
    let records = many(30);
    let mut table = TableView::new(&records);
    for _ in 0..10 {
        table.next_page();
    }
    assert_eq!(table.pagination().current_page(), 3);
    assert_eq!(table.page_rows().len(), 6);
}
