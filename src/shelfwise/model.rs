use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the id prefix shown in listings and accepted by `mark`.
pub const SHORT_ID_LEN: usize = 8;

/// Reading-progress label attached to every book.
///
/// The set is open: labels other than the three known ones survive a
/// load/save cycle untouched as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReadingStatus {
    #[default]
    WantToRead,
    Reading,
    Finished,
    Other(String),
}

impl ReadingStatus {
    /// Known tags, in badge order.
    pub const KNOWN: [ReadingStatus; 3] = [
        ReadingStatus::WantToRead,
        ReadingStatus::Reading,
        ReadingStatus::Finished,
    ];

    pub fn label(&self) -> &str {
        match self {
            ReadingStatus::WantToRead => "Want to Read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Finished => "Finished",
            ReadingStatus::Other(label) => label.as_str(),
        }
    }

    /// Only finished books carry a meaningful "date read".
    pub fn is_complete(&self) -> bool {
        matches!(self, ReadingStatus::Finished)
    }
}

impl From<String> for ReadingStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Want to Read" => ReadingStatus::WantToRead,
            "Reading" => ReadingStatus::Reading,
            "Finished" => ReadingStatus::Finished,
            _ => ReadingStatus::Other(label),
        }
    }
}

impl From<ReadingStatus> for String {
    fn from(status: ReadingStatus) -> Self {
        match status {
            ReadingStatus::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient parsing for user input: `want-to-read`, `want_to_read` and
/// `want to read` all name the same tag, in any case.
impl FromStr for ReadingStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();

        Ok(match normalized.as_str() {
            "want to read" => ReadingStatus::WantToRead,
            "reading" => ReadingStatus::Reading,
            "finished" => ReadingStatus::Finished,
            _ => ReadingStatus::Other(s.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub author: String,
    pub status: ReadingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub shelf_ids: Vec<String>,
}

impl BookRecord {
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        status: ReadingStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            title: title.into(),
            author: author.into(),
            status,
            created_at: now,
            updated_at: now,
            cover_image: None,
            shelf_ids: Vec::new(),
        }
    }

    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..SHORT_ID_LEN].to_string()
    }
}
