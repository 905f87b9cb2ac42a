//! User actions on the tracker screen and error modeling for front-ends.

use reqwest::StatusCode;
use shared::domain::{RequestId, RequestStatus, RequestType};

use crate::{error::ClientError, view::SortKey};

/// One discrete interaction with the table or its dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Click on a requester cell.
    FilterAuthor(String),
    /// Click on a date cell.
    FilterDate(String),
    FilterStatus(RequestStatus),
    FilterType(RequestType),
    ClearAuthor,
    ClearDate,
    ClearStatus,
    ClearType,
    ResetFilters,
    /// Click on a sortable column header.
    Sort(SortKey),
    NextPage,
    PrevPage,
    /// Click on an id or a description.
    OpenDetail(RequestId),
    OpenForm,
    CloseDialog,
}

impl TableAction {
    pub fn name(&self) -> &'static str {
        match self {
            TableAction::FilterAuthor(_) => "filter_author",
            TableAction::FilterDate(_) => "filter_date",
            TableAction::FilterStatus(_) => "filter_status",
            TableAction::FilterType(_) => "filter_type",
            TableAction::ClearAuthor => "clear_author",
            TableAction::ClearDate => "clear_date",
            TableAction::ClearStatus => "clear_status",
            TableAction::ClearType => "clear_type",
            TableAction::ResetFilters => "reset_filters",
            TableAction::Sort(_) => "sort",
            TableAction::NextPage => "next_page",
            TableAction::PrevPage => "prev_page",
            TableAction::OpenDetail(_) => "open_detail",
            TableAction::OpenForm => "open_form",
            TableAction::CloseDialog => "close_dialog",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    LoadRequests,
    SubmitRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, error: &ClientError) -> Self {
        let category = match error {
            ClientError::InvalidUrl(_) | ClientError::UnsupportedAttachment { .. } => {
                UiErrorCategory::Validation
            }
            ClientError::Api { status, .. } => category_for_status(*status),
            ClientError::Http(err) => match err.status() {
                Some(status) => category_for_status(status),
                None if err.is_connect() || err.is_timeout() || err.is_request() => {
                    UiErrorCategory::Transport
                }
                None => UiErrorCategory::Unknown,
            },
        };

        Self {
            category,
            context,
            message: error.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short user-facing line for the status bar.
    pub fn summary(&self) -> String {
        let action = match self.context {
            UiErrorContext::LoadRequests => "Не удалось загрузить запросы",
            UiErrorContext::SubmitRequest => "Не удалось отправить запрос",
        };
        format!("{action}: {}", self.message)
    }
}

/// Rejected input is the caller's to fix; server faults are treated like an
/// unreachable backend.
fn category_for_status(status: StatusCode) -> UiErrorCategory {
    if status.is_client_error() {
        UiErrorCategory::Validation
    } else if status.is_server_error() {
        UiErrorCategory::Transport
    } else {
        UiErrorCategory::Unknown
    }
}
