//! Plain-text rendering of the table, the detail dialog and form errors.

use client_core::{Field, FormErrors, TableView};
use shared::domain::RequestRecord;

const DESCRIPTION_WIDTH: usize = 36;

pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::User => "Автор обращения",
        Field::Description => "Описание",
    }
}

pub fn table(table: &TableView) -> String {
    let mut lines = vec![
        format!("Страница {}", table.pagination().label()),
        format!(
            "{:<8} {:<24} {:<w$} {:<16} {:<10} {:<10}",
            "Номер",
            "Тип запроса",
            "Описание",
            "Пользователь",
            "Дата",
            "Статус",
            w = DESCRIPTION_WIDTH
        ),
    ];
    lines.extend(table.padded_page_rows().into_iter().map(|row| match row {
        Some(record) => format!(
            "{:<8} {:<24} {:<w$} {:<16} {:<10} {:<10}",
            record.id,
            record.kind,
            truncate(&record.description, DESCRIPTION_WIDTH),
            record.user,
            record.date,
            record.status,
            w = DESCRIPTION_WIDTH
        ),
        None => String::new(),
    }));

    let tags = table.filters().tags();
    if !tags.is_empty() {
        lines.push(format!("Фильтры: {}", tags.join(", ")));
    }
    if let Some(sort) = table.sort() {
        lines.push(format!("Сортировка: {} ({:?})", sort.key, sort.order));
    }
    to_text(lines)
}

pub fn detail(record: &RequestRecord) -> String {
    format!(
        "Запрос №{}\nТип запроса: {}\nПользователь: {}\nДата: {}\nСтатус: {}\nОписание:\n{}\n",
        record.id, record.kind, record.user, record.date, record.status, record.description
    )
}

/// One `label: message` line per failing field.
pub fn form_errors(errors: &FormErrors) -> String {
    to_text(
        errors
            .iter()
            .map(|error| format!("{}: {}", field_label(error.field), error.message)),
    )
}

fn to_text(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::PAGE_SIZE;
    use shared::domain::{RequestId, RequestStatus, RequestType};

    fn sample() -> RequestRecord {
        RequestRecord {
            id: RequestId(5),
            user: "Анна".into(),
            kind: RequestType::Defect,
            description: "Не работает поиск".into(),
            date: "01.03.2024".into(),
            status: RequestStatus::Done,
        }
    }

    #[test]
    fn table_always_prints_a_full_page() {
        let records = vec![sample()];
        let view = TableView::new(&records);
        let text = table(&view);
        // Page label, header, then one line per row slot.
        assert_eq!(text.lines().count(), 2 + PAGE_SIZE);
        assert!(text.starts_with("Страница 1 из 1"));
        assert!(text.contains("Не работает поиск"));
    }

    #[test]
    fn long_descriptions_are_shortened() {
        let long = "а".repeat(50);
        let short = truncate(&long, 10);
        assert_eq!(short.chars().count(), 10);
        assert!(short.ends_with('…'));
        assert_eq!(truncate("коротко", 10), "коротко");
    }

    #[test]
    fn detail_lists_every_field() {
        let text = detail(&sample());
        assert!(text.contains("Запрос №5"));
        assert!(text.contains("Статус: Выполнено"));
        assert!(text.contains("Тип запроса: Ошибка"));
        assert!(text.ends_with("Не работает поиск\n"));
    }

    #[test]
    fn form_errors_are_labelled_per_field() {
        let errors = client_core::ValidationRules::default().validate("Ан", "Описание");
        assert_eq!(
            form_errors(&errors),
            "Автор обращения: Поле обязательно к заполнению, минимальное количество символов 3\n"
        );
    }
}
