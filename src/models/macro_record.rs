use serde::{Deserialize, Serialize};

/// One page of the Zendesk macros resource
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MacroPage {
    /// Macro records on this page
    pub macros: Vec<ZendeskMacro>,
    /// URL of the following page, null on the last page
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A single macro record as returned by the API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZendeskMacro {
    /// Macro title; null or empty marks the record for dropping
    #[serde(default)]
    pub title: Option<String>,
    /// Last modification timestamp, kept as an opaque string
    pub updated_at: String,
    /// Directives the macro applies when executed
    pub actions: Vec<MacroAction>,
}

/// A field-setting directive attached to a macro
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MacroAction {
    /// Identifier of the field this action sets
    pub field: String,
    /// Value to set; a string for comment/subject actions, arbitrary JSON otherwise
    #[serde(default)]
    pub value: serde_json::Value,
}

impl ZendeskMacro {
    /// Title with null and empty collapsed to None
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

impl MacroAction {
    /// Action value as text: strings verbatim, anything else compact JSON
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
