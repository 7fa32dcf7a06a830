use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A level-2 section: its heading and ordered HTML content fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub content: Vec<String>,
}

/// Result of converting one document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub title: String,
    /// Parenthesised name from the title, e.g. `Trail Pacing`.
    pub app_name: Option<String>,
    pub sections: Vec<Section>,
    pub date_found: NaiveDate,
}

/// Caller-supplied, opaque metadata values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOptions {
    pub version: String,
    pub locale: String,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            locale: "en-GB".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub version: String,
    pub last_updated: NaiveDate,
    /// Always equal to `last_updated`.
    pub effective_date: NaiveDate,
    pub locale: String,
}

/// The persisted shape of a converted policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub app_id: String,
    pub title: String,
    pub sections: Vec<Section>,
    pub metadata: DocumentMetadata,
}

impl PolicyDocument {
    pub fn new(converted: ConvertedDocument, app_id: String, options: &MetadataOptions) -> Self {
        Self {
            app_id,
            title: converted.title,
            sections: converted.sections,
            metadata: DocumentMetadata {
                version: options.version.clone(),
                last_updated: converted.date_found,
                effective_date: converted.date_found,
                locale: options.locale.clone(),
            },
        }
    }

    /// File name for this document: `YYYY-MM-DD.json` from the update date.
    pub fn output_file_name(&self) -> String {
        format!("{}.json", self.metadata.last_updated.format("%Y-%m-%d"))
    }
}
