use serde::{Deserialize, Serialize};

use crate::markov::ChainModel;

/// A named reference text, as stored in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceText {
    /// Name reported with every match against this text (not interpreted)
    pub name: String,

    /// Raw, un-normalized text
    pub text: String,

    /// Description/notes about this reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReferenceText {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the chain model for this text
    #[must_use]
    pub fn chain(&self) -> ChainModel {
        ChainModel::from_text(&self.text)
    }
}
