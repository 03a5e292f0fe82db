//! Request types for the Anthropic Messages API.

use serde::Serialize;

/// Role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single message in a conversation.
///
/// Content is sent in the string shorthand form, not as content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// A `user` message carrying `text` verbatim.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }
}

/// A request to the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

impl CreateMessageRequest {
    /// A request holding exactly one user message with `prompt`.
    pub fn single_prompt(model: impl Into<String>, max_tokens: u32, prompt: &str) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![Message::user(prompt)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_prompt_request_body() {
        let request =
            CreateMessageRequest::single_prompt("claude-haiku-4-5-20251001", 1024, "What is 2+2?");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "claude-haiku-4-5-20251001",
                "max_tokens": 1024,
                "messages": [{"role": "user", "content": "What is 2+2?"}]
            })
        );
    }

    #[test]
    fn empty_prompt_is_sent_as_is() {
        let request = CreateMessageRequest::single_prompt("m", 1, "");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0], Message::user(""));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
