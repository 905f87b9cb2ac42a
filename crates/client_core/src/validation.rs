//! Synchronous field rules for the new-request form.
//!
//! Each field runs its rules in order (required, minimum length, pattern) and
//! reports the first one that fails. Pattern failures carry their own message
//! so the form can tell "wrong characters" apart from "too short/missing".

use regex::Regex;

pub const USER_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 5;

/// Letters accepted in free-text fields, as a regex character-class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    pub letters: String,
    pub user_hint: String,
    pub description_hint: String,
}

impl Alphabet {
    pub fn cyrillic() -> Self {
        Self {
            letters: "А-Яа-яЁё".into(),
            user_hint: "Только русские символы".into(),
            description_hint: "Только русские символы и цифры".into(),
        }
    }

    /// Custom letter class with neutral pattern messages.
    pub fn custom(letters: impl Into<String>) -> Self {
        let letters = letters.into();
        Self {
            user_hint: format!("Только символы [{letters}]"),
            description_hint: format!("Только символы [{letters}] и цифры"),
            letters,
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::cyrillic()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    User,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength { min: usize },
    Pattern,
}

impl Violation {
    pub fn is_pattern(self) -> bool {
        matches!(self, Violation::Pattern)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub user: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.description.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.user.iter().chain(self.description.iter())
    }
}

#[derive(Debug, Clone)]
pub struct ValidationRules {
    alphabet: Alphabet,
    user_pattern: Regex,
    description_pattern: Regex,
}

impl ValidationRules {
    pub fn new(alphabet: Alphabet) -> Result<Self, regex::Error> {
        // The name only has to contain one letter; the description must be
        // made of letters, digits and whitespace throughout.
        let user_pattern = Regex::new(&format!("[{}]", alphabet.letters))?;
        let description_pattern = Regex::new(&format!(r"^[{}0-9\s]+$", alphabet.letters))?;
        Ok(Self {
            alphabet,
            user_pattern,
            description_pattern,
        })
    }

    pub fn validate_user(&self, value: &str) -> Option<FieldError> {
        check(
            Field::User,
            value,
            USER_MIN_CHARS,
            &self.user_pattern,
            &self.alphabet.user_hint,
        )
    }

    pub fn validate_description(&self, value: &str) -> Option<FieldError> {
        check(
            Field::Description,
            value,
            DESCRIPTION_MIN_CHARS,
            &self.description_pattern,
            &self.alphabet.description_hint,
        )
    }

    pub fn validate(&self, user: &str, description: &str) -> FormErrors {
        FormErrors {
            user: self.validate_user(user),
            description: self.validate_description(description),
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::new(Alphabet::cyrillic()).expect("built-in alphabet compiles")
    }
}

fn check(
    field: Field,
    value: &str,
    min: usize,
    pattern: &Regex,
    pattern_hint: &str,
) -> Option<FieldError> {
    let violation = if value.is_empty() {
        Violation::Required
    } else if value.chars().count() < min {
        Violation::MinLength { min }
    } else if !pattern.is_match(value) {
        Violation::Pattern
    } else {
        return None;
    };

    let message = match violation {
        Violation::Pattern => pattern_hint.to_string(),
        _ => format!("Поле обязательно к заполнению, минимальное количество символов {min}"),
    };

    Some(FieldError {
        field,
        violation,
        message,
    })
}
