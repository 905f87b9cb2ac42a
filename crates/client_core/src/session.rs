use chrono::{Local, NaiveDate};
use shared::domain::RequestRecord;
use tracing::{debug, error, warn};

use crate::{
    api::RequestApi,
    controller::{TableAction, UiError, UiErrorContext},
    dialog::Dialog,
    store::RequestStore,
    table::TableView,
    validation::{FormErrors, ValidationRules},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No form dialog was open.
    NoForm,
    /// Validation failed; the form stays open with its field errors.
    Invalid(FormErrors),
    /// Posted and reloaded; carries the new record count.
    Submitted { records: usize },
    /// The post or the follow-up reload failed. The form is already closed.
    Failed(UiError),
}

/// Everything one tracker screen holds: records, table state and the dialog.
pub struct TrackerSession<A: RequestApi> {
    api: A,
    rules: ValidationRules,
    store: RequestStore,
    table: TableView,
    dialog: Dialog,
    last_error: Option<UiError>,
}

impl<A: RequestApi> TrackerSession<A> {
    pub fn new(api: A) -> Self {
        Self::with_rules(api, ValidationRules::default())
    }

    pub fn with_rules(api: A, rules: ValidationRules) -> Self {
        Self {
            api,
            rules,
            store: RequestStore::new(),
            table: TableView::default(),
            dialog: Dialog::Closed,
            last_error: None,
        }
    }

    pub fn store(&self) -> &RequestStore {
        &self.store
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog {
        &mut self.dialog
    }

    pub fn last_error(&self) -> Option<&UiError> {
        self.last_error.as_ref()
    }

    /// Fetches the full record list and recomputes the table.
    pub async fn reload(&mut self) -> Result<usize, UiError> {
        match self.store.reload(&self.api).await {
            Ok(count) => {
                self.table.refresh(self.store.records());
                Ok(count)
            }
            Err(err) => {
                let ui_error = UiError::from_client_error(UiErrorContext::LoadRequests, &err);
                error!(error = %err, "failed to load requests");
                self.last_error = Some(ui_error.clone());
                Err(ui_error)
            }
        }
    }

    pub fn dispatch(&mut self, action: TableAction) {
        debug!(action = action.name(), "table action");
        let records = self.store.records();
        match action {
            TableAction::FilterAuthor(author) => self.table.set_author_filter(records, author),
            TableAction::FilterDate(date) => self.table.set_date_filter(records, date),
            TableAction::FilterStatus(status) => self.table.set_status_filter(records, status),
            TableAction::FilterType(kind) => self.table.set_type_filter(records, kind),
            TableAction::ClearAuthor => self.table.clear_author_filter(records),
            TableAction::ClearDate => self.table.clear_date_filter(records),
            TableAction::ClearStatus => self.table.clear_status_filter(records),
            TableAction::ClearType => self.table.clear_type_filter(records),
            TableAction::ResetFilters => self.table.reset(records),
            TableAction::Sort(key) => self.table.toggle_sort(records, key),
            TableAction::NextPage => self.table.next_page(),
            TableAction::PrevPage => self.table.prev_page(),
            TableAction::OpenDetail(id) => match self.store.get(id) {
                Some(record) => self.dialog.open_detail(record.clone()),
                None => warn!(%id, "detail requested for unknown request"),
            },
            TableAction::OpenForm => self.dialog.open_form(),
            TableAction::CloseDialog => {
                self.dialog.close();
            }
        }
    }

    pub fn detail(&self) -> Option<&RequestRecord> {
        self.dialog.detail()
    }

    pub async fn submit_form(&mut self) -> SubmitOutcome {
        self.submit_form_on(Local::now().date_naive()).await
    }

    /// Validates the open form and, when it passes, closes the dialog before
    /// posting. Failures are logged and kept as the session's last error;
    /// nothing is retried.
    pub async fn submit_form_on(&mut self, today: NaiveDate) -> SubmitOutcome {
        let Some(form) = self.dialog.form_mut() else {
            return SubmitOutcome::NoForm;
        };
        if !form.validate(&self.rules) {
            return SubmitOutcome::Invalid(form.errors().clone());
        }
        let Some(form) = self.dialog.close() else {
            return SubmitOutcome::NoForm;
        };

        let payload = form.to_payload(today);
        if let Err(err) = self.api.submit_request(&payload).await {
            error!(error = %err, "error sending request submission");
            let ui_error = UiError::from_client_error(UiErrorContext::SubmitRequest, &err);
            self.last_error = Some(ui_error.clone());
            return SubmitOutcome::Failed(ui_error);
        }

        match self.reload().await {
            Ok(records) => {
                self.last_error = None;
                SubmitOutcome::Submitted { records }
            }
            Err(ui_error) => SubmitOutcome::Failed(ui_error),
        }
    }
}
