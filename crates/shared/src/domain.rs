use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(RequestId);

/// Returned when a display label does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {label}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Kind of request. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestType {
    #[default]
    #[serde(rename = "Ошибка")]
    Defect,
    #[serde(rename = "Новая функциональность")]
    Feature,
    #[serde(rename = "Улучшение")]
    Improvement,
    #[serde(rename = "Документация")]
    Documentation,
}

impl RequestType {
    /// Dropdown order; the first entry is the form default.
    pub const ALL: [RequestType; 4] = [
        RequestType::Defect,
        RequestType::Feature,
        RequestType::Improvement,
        RequestType::Documentation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequestType::Defect => "Ошибка",
            RequestType::Feature => "Новая функциональность",
            RequestType::Improvement => "Улучшение",
            RequestType::Documentation => "Документация",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RequestType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RequestType::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "request type",
                label: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    #[serde(rename = "Ожидает", alias = "В ожидании")]
    Pending,
    #[serde(rename = "В работе")]
    InProgress,
    #[serde(rename = "Выполнено")]
    Done,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Done,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Ожидает",
            RequestStatus::InProgress => "В работе",
            RequestStatus::Done => "Выполнено",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "В ожидании" {
            return Ok(RequestStatus::Pending);
        }
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| UnknownLabel {
                kind: "request status",
                label: s.to_string(),
            })
    }
}

/// One tracked request as served by the backend.
///
/// `date` is the display string (`DD.MM.YYYY`) exactly as stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: RequestId,
    pub user: String,
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub description: String,
    pub date: String,
    pub status: RequestStatus,
}
