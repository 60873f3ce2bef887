use serde::{Deserialize, Serialize};

use crate::domain::{CatalogError, Result};

/// One catalog entry.
///
/// Title and author are checked at construction. The class code is kept as
/// written; its format is only checked by the operations that read it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    title: String,
    author: String,
    class_code: String,
}

/// Wire shape accepted on import, before validation
#[derive(Deserialize)]
struct RecordFields {
    title: String,
    author: String,
    #[serde(alias = "dewey_decimal", alias = "ddc_number")]
    class_code: String,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        class_code: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(CatalogError::Validation("title must not be empty".into()));
        }
        if author.trim().is_empty() {
            return Err(CatalogError::Validation("author must not be empty".into()));
        }

        Ok(Self {
            title,
            author,
            class_code: class_code.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn class_code(&self) -> &str {
        &self.class_code
    }
}

impl TryFrom<RecordFields> for Record {
    type Error = CatalogError;

    fn try_from(fields: RecordFields) -> Result<Self> {
        Record::new(fields.title, fields.author, fields.class_code)
    }
}

/// Import a JSON array of `{title, author, class_code}` objects
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    tracing::debug!("Imported {} records", records.len());
    Ok(records)
}
