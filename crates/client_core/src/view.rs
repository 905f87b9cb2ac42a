//! Filter and sort pipeline over the in-memory record list.

use std::{cmp::Ordering, fmt, str::FromStr};

use shared::domain::{RequestRecord, RequestStatus, RequestType};

/// Active equality filters. `None` means no constraint on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub author: Option<String>,
    pub date: Option<String>,
    pub status: Option<RequestStatus>,
    pub kind: Option<RequestType>,
}

impl Filters {
    pub fn matches(&self, record: &RequestRecord) -> bool {
        self.author.as_deref().map_or(true, |a| record.user == a)
            && self.date.as_deref().map_or(true, |d| record.date == d)
            && self.status.map_or(true, |s| record.status == s)
            && self.kind.map_or(true, |k| record.kind == k)
    }

    /// Filter tags in display order: author, date, status, type.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(author) = &self.author {
            tags.push(author.clone());
        }
        if let Some(date) = &self.date {
            tags.push(date.clone());
        }
        if let Some(status) = self.status {
            tags.push(status.label().to_string());
        }
        if let Some(kind) = self.kind {
            tags.push(kind.label().to_string());
        }
        tags
    }
}

/// Empty strings clear the filter rather than matching empty values.
pub(crate) fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

/// Sortable columns. The description column has no sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Type,
    User,
    Date,
    Status,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Type => "type",
            SortKey::User => "user",
            SortKey::Date => "date",
            SortKey::Status => "status",
        }
    }

    fn compare(self, a: &RequestRecord, b: &RequestRecord) -> Ordering {
        match self {
            SortKey::Id => a.id.0.cmp(&b.id.0),
            SortKey::Type => collate(a.kind.label(), b.kind.label()),
            SortKey::User => collate(&a.user, &b.user),
            SortKey::Date => collate(&a.date, &b.date),
            SortKey::Status => collate(a.status.label(), b.status.label()),
        }
    }
}

/// Russian-aware string order: letters compare case-insensitively with `ё`
/// next to `е`, then `е` before `ё`, then lowercase before uppercase.
pub(crate) fn collate(a: &str, b: &str) -> Ordering {
    fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars().flat_map(char::to_lowercase)
    }
    fn primary(c: char) -> char {
        if c == 'ё' {
            'е'
        } else {
            c
        }
    }

    folded(a)
        .map(primary)
        .cmp(folded(b).map(primary))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "type" => Ok(SortKey::Type),
            "user" | "author" => Ok(SortKey::User),
            "date" => Ok(SortKey::Date),
            "status" => Ok(SortKey::Status),
            other => Err(format!("unknown sort column: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Desc,
        }
    }

    /// Header click: the same column flips asc to desc, anything else
    /// starts ascending on the clicked column.
    pub fn toggled(current: Option<Sort>, key: SortKey) -> Sort {
        match current {
            Some(Sort {
                key: current_key,
                order: SortOrder::Asc,
            }) if current_key == key => Sort::desc(key),
            _ => Sort::asc(key),
        }
    }
}

/// Filters then sorts `records`. Source order is kept for equal keys.
pub fn derive_view(
    records: &[RequestRecord],
    filters: &Filters,
    sort: Option<Sort>,
) -> Vec<RequestRecord> {
    let mut rows: Vec<RequestRecord> = records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect();

    if let Some(sort) = sort {
        rows.sort_by(|a, b| match sort.order {
            SortOrder::Asc => sort.key.compare(a, b),
            SortOrder::Desc => sort.key.compare(b, a),
        });
    }

    rows
}
