pub const PAGE_SIZE: usize = 12;

/// Current page over a list of `len` rows. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    len: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, len: 0 }
    }
}

impl Pagination {
    pub fn new(len: usize) -> Self {
        Self { page: 1, len }
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// `ceil(len / PAGE_SIZE)`; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(PAGE_SIZE)
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Back to page 1 over a list of the new length.
    pub fn reset(&mut self, len: usize) {
        self.page = 1;
        self.len = len;
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * PAGE_SIZE).min(self.len);
        let end = (start + PAGE_SIZE).min(self.len);
        start..end
    }

    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.range();
        &rows[range.start.min(rows.len())..range.end.min(rows.len())]
    }

    /// Visible rows padded with `None` up to a full page.
    pub fn padded_rows<'a, T>(&self, rows: &'a [T]) -> Vec<Option<&'a T>> {
        let mut padded: Vec<Option<&T>> = self.page_slice(rows).iter().map(Some).collect();
        padded.resize(PAGE_SIZE, None);
        padded
    }

    /// Header label, e.g. `2 из 5`.
    pub fn label(&self) -> String {
        format!("{} из {}", self.page, self.total_pages())
    }
}
