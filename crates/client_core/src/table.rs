//! Table state: filters, sort and page over the store's records.
//!
//! Every mutation re-runs [`derive_view`] against the records it is given and
//! puts the page back to 1, so the rows are always a function of
//! (records, filters, sort).

use shared::domain::{RequestRecord, RequestStatus, RequestType};
use tracing::debug;

use crate::{
    pagination::Pagination,
    view::{derive_view, non_empty, Filters, Sort, SortKey},
};

#[derive(Debug, Clone, Default)]
pub struct TableView {
    filters: Filters,
    sort: Option<Sort>,
    rows: Vec<RequestRecord>,
    pagination: Pagination,
}

impl TableView {
    pub fn new(records: &[RequestRecord]) -> Self {
        let mut table = Self::default();
        table.refresh(records);
        table
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Filtered and sorted rows across all pages.
    pub fn rows(&self) -> &[RequestRecord] {
        &self.rows
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page_rows(&self) -> &[RequestRecord] {
        self.pagination.page_slice(&self.rows)
    }

    pub fn padded_page_rows(&self) -> Vec<Option<&RequestRecord>> {
        self.pagination.padded_rows(&self.rows)
    }

    /// Recomputes the rows, e.g. after the store reloaded.
    pub fn refresh(&mut self, records: &[RequestRecord]) {
        self.rows = derive_view(records, &self.filters, self.sort);
        self.pagination.reset(self.rows.len());
        debug!(
            rows = self.rows.len(),
            total = records.len(),
            "table view recomputed"
        );
    }

    pub fn set_author_filter(&mut self, records: &[RequestRecord], author: impl Into<String>) {
        self.filters.author = non_empty(author);
        self.refresh(records);
    }

    pub fn set_date_filter(&mut self, records: &[RequestRecord], date: impl Into<String>) {
        self.filters.date = non_empty(date);
        self.refresh(records);
    }

    pub fn set_status_filter(&mut self, records: &[RequestRecord], status: RequestStatus) {
        self.filters.status = Some(status);
        self.refresh(records);
    }

    pub fn set_type_filter(&mut self, records: &[RequestRecord], kind: RequestType) {
        self.filters.kind = Some(kind);
        self.refresh(records);
    }

    pub fn clear_author_filter(&mut self, records: &[RequestRecord]) {
        self.filters.author = None;
        self.refresh(records);
    }

    pub fn clear_date_filter(&mut self, records: &[RequestRecord]) {
        self.filters.date = None;
        self.refresh(records);
    }

    pub fn clear_status_filter(&mut self, records: &[RequestRecord]) {
        self.filters.status = None;
        self.refresh(records);
    }

    pub fn clear_type_filter(&mut self, records: &[RequestRecord]) {
        self.filters.kind = None;
        self.refresh(records);
    }

    pub fn toggle_sort(&mut self, records: &[RequestRecord], key: SortKey) {
        self.sort = Some(Sort::toggled(self.sort, key));
        self.refresh(records);
    }

    /// Drops filters and sort; rows go back to source order on page 1.
    pub fn reset(&mut self, records: &[RequestRecord]) {
        self.filters = Filters::default();
        self.sort = None;
        self.refresh(records);
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev_page();
    }
}
