use std::path::Path;

use chrono::NaiveDate;
use shared::{domain::RequestType, protocol::NewRequestPayload};

use crate::{
    error::{ClientError, ClientResult},
    validation::{FormErrors, ValidationRules},
};

const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// `DD.MM.YYYY`, the only date format the backend stores.
pub fn format_submission_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// State of the "new request" form while its dialog is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRequestForm {
    pub user: String,
    pub kind: RequestType,
    pub description: String,
    dropdown_open: bool,
    attachment: Option<String>,
    errors: FormErrors,
}

impl NewRequestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user(&mut self, value: impl Into<String>) {
        self.user = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Picking an item sets the type and closes the list.
    pub fn choose_type(&mut self, kind: RequestType) {
        self.kind = kind;
        self.dropdown_open = false;
    }

    /// Stages an image by file name. Only jpeg and png are accepted.
    pub fn stage_attachment(&mut self, path: &Path) -> ClientResult<&str> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_guess::from_path(path).first_raw().unwrap_or_default();
        if filename.is_empty() || !ACCEPTED_IMAGE_TYPES.contains(&mime) {
            return Err(ClientError::UnsupportedAttachment { filename });
        }
        Ok(self.attachment.insert(filename).as_str())
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    /// Caption shown under the picker while a file is staged.
    pub fn attachment_caption(&self) -> Option<String> {
        self.attachment
            .as_deref()
            .map(|name| format!("Имя файла: {name}"))
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Runs every field rule, stores the result and returns whether the form
    /// may be submitted.
    pub fn validate(&mut self, rules: &ValidationRules) -> bool {
        self.errors = rules.validate(&self.user, &self.description);
        self.errors.is_empty()
    }

    pub fn to_payload(&self, today: NaiveDate) -> NewRequestPayload {
        NewRequestPayload {
            user: self.user.clone(),
            kind: self.kind,
            description: self.description.clone(),
            date: format_submission_date(today),
            attachment: self.attachment.clone(),
        }
    }
}
