// ABOUTME: Fixed enumeration of supported Gemini model identifiers and their display names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModelId {
    #[default]
    Gemini10Pro,
    Gemini10ProVision,
    Gemini15Pro,
    Gemini15Flash,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown model identifier: {0}")]
pub struct UnknownModel(pub String);

impl ModelId {
    /// All selectable models, in selector order
    pub const ALL: [ModelId; 4] = [
        ModelId::Gemini10Pro,
        ModelId::Gemini10ProVision,
        ModelId::Gemini15Pro,
        ModelId::Gemini15Flash,
    ];

    /// Identifier sent to the API
    pub fn id(&self) -> &'static str {
        match self {
            ModelId::Gemini10Pro => "gemini-1.0-pro",
            ModelId::Gemini10ProVision => "gemini-1.0-pro-vision",
            ModelId::Gemini15Pro => "gemini-1.5-pro",
            ModelId::Gemini15Flash => "gemini-1.5-flash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gemini10Pro => "Gemini 1.0 Pro",
            ModelId::Gemini10ProVision => "Gemini 1.0 Pro Vision",
            ModelId::Gemini15Pro => "Gemini 1.5 Pro",
            ModelId::Gemini15Flash => "Gemini 1.5 Flash",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Next model in selector order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous model in selector order, wrapping around
    pub fn previous(self) -> Self {
        let current = self.position();
        Self::ALL[if current == 0 {
            Self::ALL.len() - 1
        } else {
            current - 1
        }]
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModelId {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s.trim())
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

impl TryFrom<String> for ModelId {
    type Error = UnknownModel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.id().to_string()
    }
}
