use std::path::Path;

use super::*;
use chrono::NaiveDate;
use shared::domain::{RequestRecord, RequestId, RequestStatus, RequestType};

#[test]
fn formats_dates_with_zero_padding() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("date");
    assert_eq!(format_submission_date(date), "07.03.2024");
}

#[test]
fn form_defaults_to_first_request_type() {
    let form = NewRequestForm::new();
    assert_eq!(form.kind, RequestType::Defect);
    assert!(!form.is_dropdown_open());
    assert!(form.attachment().is_none());
}

#[test]
fn choosing_a_type_closes_the_dropdown() {
    let mut form = NewRequestForm::new();
    form.toggle_dropdown();
    assert!(form.is_dropdown_open());
    form.choose_type(RequestType::Documentation);
    assert_eq!(form.kind, RequestType::Documentation);
    assert!(!form.is_dropdown_open());
}

#[test]
fn stages_png_and_jpeg_but_not_other_files() {
    let mut form = NewRequestForm::new();
    assert_eq!(
        form.stage_attachment(Path::new("/tmp/screen.png")).expect("png"),
        "screen.png"
    );
    assert_eq!(
        form.attachment_caption().as_deref(),
        Some("Имя файла: screen.png")
    );
    form.stage_attachment(Path::new("photo.JPG")).expect("jpeg");
    assert_eq!(form.attachment(), Some("photo.JPG"));

    let err = form
        .stage_attachment(Path::new("notes.pdf"))
        .expect_err("pdf rejected");
    assert!(matches!(err, ClientError::UnsupportedAttachment { .. }));
    assert_eq!(form.attachment(), Some("photo.JPG"));

    form.clear_attachment();
    assert!(form.attachment().is_none());
    assert!(form.attachment_caption().is_none());
}

#[test]
fn validate_stores_field_errors() {
    let rules = ValidationRules::default();
    let mut form = NewRequestForm::new();
    form.set_user("Ан");
    form.set_description("Нет доступа к отчету");
    assert!(!form.validate(&rules));
    assert!(form.errors().user.is_some());
    assert!(form.errors().description.is_none());

    form.set_user("Анна");
    assert!(form.validate(&rules));
    assert!(form.errors().is_empty());
}

#[test]
fn payload_carries_form_fields_and_formatted_date() {
    let mut form = NewRequestForm::new();
    form.set_user("Анна");
    form.set_description("Нет доступа к отчету");
    form.choose_type(RequestType::Feature);
    form.stage_attachment(Path::new("shot.png")).expect("png");

    let payload = form.to_payload(NaiveDate::from_ymd_opt(2024, 12, 1).expect("date"));
    assert_eq!(payload.user, "Анна");
    assert_eq!(payload.kind, RequestType::Feature);
    assert_eq!(payload.date, "01.12.2024");
    assert_eq!(payload.attachment.as_deref(), Some("shot.png"));
}

#[test]
fn dialog_holds_one_overlay_at_a_time() {
    let mut dialog = Dialog::default();
    assert!(!dialog.is_open());

    dialog.open_form();
    assert!(dialog.form().is_some());

    let record = RequestRecord {
        id: RequestId(1),
        user: "Анна".into(),
        kind: RequestType::Defect,
        description: "Описание".into(),
        date: "01.03.2024".into(),
        status: RequestStatus::Pending,
    };
    dialog.open_detail(record.clone());
    assert!(dialog.form().is_none());
    assert_eq!(dialog.detail(), Some(&record));

    assert!(dialog.close().is_none());
    assert_eq!(dialog, Dialog::Closed);

    dialog.open_form();
    if let Some(form) = dialog.form_mut() {
        form.set_user("Анна");
    }
    let form = dialog.close().expect("form returned");
    assert_eq!(form.user, "Анна");
}
