//! Client side of the request tracker: the record store, the table's
//! filter/sort/paginate pipeline, the new-request form and its submission.

pub mod api;
pub mod config;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod form;
pub mod pagination;
pub mod session;
pub mod store;
pub mod table;
pub mod validation;
pub mod view;

pub use api::{HttpRequestApi, RequestApi};
pub use controller::{TableAction, UiError, UiErrorCategory, UiErrorContext};
pub use dialog::Dialog;
pub use error::{ClientError, ClientResult};
pub use form::{format_submission_date, NewRequestForm};
pub use pagination::{Pagination, PAGE_SIZE};
pub use session::{SubmitOutcome, TrackerSession};
pub use store::RequestStore;
pub use table::TableView;
pub use validation::{Alphabet, Field, FieldError, FormErrors, ValidationRules, Violation};
pub use view::{derive_view, Filters, Sort, SortKey, SortOrder};

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod view_tests;

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod table_tests;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod form_tests;

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;
