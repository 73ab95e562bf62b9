//! Data card section routing.
//!
//! A card frames a chart with a title, a missing-data notice, and either the
//! content, a loading spinner or an error message. This module only decides
//! which sections are shown and in what order; drawing them is up to the
//! renderer.

use serde::{Deserialize, Serialize};

/// Inputs for a data card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardProps {
    pub title: String,
    /// Tooltip text for the title.
    pub description: String,
    pub error: Option<String>,
    pub is_loading: bool,
    /// Names of data streams that are unavailable.
    pub missing_data: Vec<String>,
}

/// One visible section of a card, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum CardSection {
    Title { text: String, tooltip: String },
    MissingData { text: String },
    Content,
    Spinner,
    Error { message: String },
}

/// Styling state derived from the props (passed to the theme resolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardStyleState {
    pub has_error: bool,
    pub is_loading: bool,
}

impl CardProps {
    pub fn style_state(&self) -> CardStyleState {
        CardStyleState {
            has_error: self.has_error(),
            is_loading: self.is_loading,
        }
    }

    /// Error set and non-empty.
    fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// The visible sections, top to bottom.
    ///
    /// An empty missing-data list shows nothing; content is hidden while
    /// loading or on error.
    pub fn sections(&self) -> Vec<CardSection> {
        let mut sections = Vec::new();

        if !self.title.is_empty() {
            sections.push(CardSection::Title {
                text: self.title.clone(),
                tooltip: self.description.clone(),
            });
        }

        if !self.missing_data.is_empty() {
            sections.push(CardSection::MissingData {
                text: format!("Missing Data: {}", self.missing_data.join(", ")),
            });
        }

        if !self.is_loading && !self.has_error() {
            sections.push(CardSection::Content);
        }
        if self.is_loading {
            sections.push(CardSection::Spinner);
        }
        if let Some(message) = self.error.as_ref().filter(|e| !e.is_empty()) {
            sections.push(CardSection::Error {
                message: message.clone(),
            });
        }

        sections
    }
}
