use shared::domain::RequestRecord;

use crate::form::NewRequestForm;

/// The one overlay that can be open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    ShowingDetail(RequestRecord),
    ShowingForm(NewRequestForm),
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn open_detail(&mut self, record: RequestRecord) {
        *self = Dialog::ShowingDetail(record);
    }

    /// Opens a blank form, replacing whatever was shown.
    pub fn open_form(&mut self) {
        *self = Dialog::ShowingForm(NewRequestForm::new());
    }

    /// Closes the overlay and hands back the form if one was open.
    pub fn close(&mut self) -> Option<NewRequestForm> {
        match std::mem::take(self) {
            Dialog::ShowingForm(form) => Some(form),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&RequestRecord> {
        match self {
            Dialog::ShowingDetail(record) => Some(record),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&NewRequestForm> {
        match self {
            Dialog::ShowingForm(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut NewRequestForm> {
        match self {
            Dialog::ShowingForm(form) => Some(form),
            _ => None,
        }
    }
}
