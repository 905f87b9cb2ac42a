use super::*;

#[test]
fn short_name_is_a_length_error_not_a_pattern_error() {
    let rules = ValidationRules::default();
    let err = rules.validate_user("Ан").expect("too short");
    assert_eq!(err.field, Field::User);
    assert_eq!(err.violation, Violation::MinLength { min: 3 });
    assert!(!err.violation.is_pattern());
    assert_eq!(
        err.message,
        "Поле обязательно к заполнению, минимальное количество символов 3"
    );
}

#[test]
fn empty_name_is_required() {
    let rules = ValidationRules::default();
    let err = rules.validate_user("").expect("required");
    assert_eq!(err.violation, Violation::Required);
    assert!(err.message.ends_with('3'));
}

#[test]
fn name_without_alphabet_letters_fails_pattern() {
    let rules = ValidationRules::default();
    let err = rules.validate_user("John").expect("pattern");
    assert_eq!(err.violation, Violation::Pattern);
    assert_eq!(err.message, "Только русские символы");
    assert_eq!(rules.validate_user("Анна"), None);
    assert_eq!(rules.validate_user("Ёжик"), None);
}

#[test]
fn description_accepts_letters_digits_and_whitespace() {
    let rules = ValidationRules::default();
    assert_eq!(rules.validate_description("Ошибка 404 на\tглавной"), None);
}

#[test]
fn description_with_foreign_characters_fails_pattern() {
    let rules = ValidationRules::default();
    let err = rules
        .validate_description("Ошибка в модуле auth")
        .expect("pattern");
    assert_eq!(err.field, Field::Description);
    assert_eq!(err.violation, Violation::Pattern);
    assert_eq!(err.message, "Только русские символы и цифры");

    let err = rules.validate_description("Ошибка!").expect("punctuation");
    assert_eq!(err.violation, Violation::Pattern);
}

#[test]
fn short_description_reports_length() {
    let rules = ValidationRules::default();
    let err = rules.validate_description("Тест").expect("too short");
    assert_eq!(err.violation, Violation::MinLength { min: 5 });
    assert_eq!(
        err.message,
        "Поле обязательно к заполнению, минимальное количество символов 5"
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    let rules = ValidationRules::default();
    // Three Cyrillic letters are six bytes in UTF-8.
    assert_eq!(rules.validate_user("Яна"), None);
}

#[test]
fn validate_collects_errors_per_field() {
    let rules = ValidationRules::default();
    let errors = rules.validate("Ан", "описание");
    assert!(errors.user.is_some());
    assert!(errors.description.is_none());
    assert_eq!(errors.iter().count(), 1);
    assert!(rules.validate("Анна", "Описание проблемы").is_empty());
}

#[test]
fn custom_alphabet_switches_the_letter_class() {
    let rules = ValidationRules::new(Alphabet::custom("A-Za-z")).expect("rules");
    assert_eq!(rules.validate_user("John"), None);
    assert_eq!(rules.validate_description("Broken login 2"), None);

    let err = rules.validate_user("Анна").expect("pattern");
    assert_eq!(err.violation, Violation::Pattern);
    assert_eq!(err.message, "Только символы [A-Za-z]");
}

#[test]
fn malformed_letter_class_is_rejected() {
    assert!(ValidationRules::new(Alphabet::custom("z-a")).is_err());
}
