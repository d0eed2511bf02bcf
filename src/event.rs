//! Edit event parsing.
//!
//! Hosts send one JSON object per invocation. Edit fields live either at the
//! top level or, in the host envelope shape, under `tool_input`:
//!
//! ```json
//! {"tool_name": "Edit", "tool_input": {"file_path": "...", "new_string": "..."}}
//! ```

use serde::Deserialize;

use crate::error::Error;

/// A single pending or completed file edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEvent {
    /// Host tool that produced the edit, if the envelope named one.
    pub tool_name: Option<String>,
    pub file_path: String,
    /// Replacement text of an incremental edit.
    pub new_string: String,
    /// Full file body of a write.
    pub content: String,
    /// Replacement texts of a multi-edit, in order.
    pub edits: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    tool_name: Option<String>,
    #[serde(default)]
    tool_input: Option<EditFields>,
    #[serde(flatten)]
    top_level: EditFields,
}

#[derive(Debug, Default, Deserialize)]
struct EditFields {
    #[serde(default)]
    file_path: Option<String>,
    #[serde(default)]
    new_string: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    edits: Option<Vec<EditOp>>,
}

#[derive(Debug, Deserialize)]
struct EditOp {
    #[serde(default)]
    new_string: Option<String>,
}

impl EditEvent {
    /// Parse an event from the raw stdin payload.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(Error::InvalidEvent("expected a JSON object".to_string()));
        }
        let envelope: Envelope = serde_json::from_value(value)?;
        let fields = envelope.tool_input.unwrap_or(envelope.top_level);

        Ok(Self {
            tool_name: envelope.tool_name,
            file_path: fields.file_path.unwrap_or_default(),
            new_string: fields.new_string.unwrap_or_default(),
            content: fields.content.unwrap_or_default(),
            edits: fields
                .edits
                .unwrap_or_default()
                .into_iter()
                .filter_map(|op| op.new_string)
                .collect(),
        })
    }

    /// Everything this edit introduced, as one blob.
    pub fn changed_text(&self) -> String {
        let mut text = String::with_capacity(
            self.new_string.len()
                + self.content.len()
                + self.edits.iter().map(String::len).sum::<usize>(),
        );
        text.push_str(&self.new_string);
        text.push_str(&self.content);
        for edit in &self.edits {
            text.push_str(edit);
        }
        text
    }
}
