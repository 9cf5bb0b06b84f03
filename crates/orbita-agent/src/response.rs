// Reply payloads from the agent service's responses endpoint.
//
// Two shapes occur in the wild: a pre-flattened `output_text` field, and a
// structured `output` array whose message items carry typed content blocks.
// Both are tolerated, and unknown item or block kinds fall through to
// catch-all variants so a new upstream type never breaks deserialization.

use serde::Deserialize;

/// Non-streaming reply from the responses endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// Item in the structured output array
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentBlock>,
    },
    #[serde(other)]
    Other,
}

/// Content block inside a message item
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    OutputText { text: String },
    #[serde(other)]
    Other,
}

impl AgentReply {
    /// Extract the reply text, preferring the flat field
    ///
    /// Falls back to joining every textual content block with a space, and
    /// finally to the empty string when neither shape yields any text.
    pub fn text(&self) -> String {
        if let Some(text) = &self.output_text {
            if !text.is_empty() {
                return text.clone();
            }
        }

        let texts: Vec<&str> = self
            .output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { content } => Some(content),
                OutputItem::Other => None,
            })
            .flatten()
            .filter_map(|block| match block {
                ContentBlock::OutputText { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect();

        texts.join(" ")
    }
}
