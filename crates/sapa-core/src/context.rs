use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// A single entry in a user's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Conversation context passed to a completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Persona instructions sent as the leading `system` turn.
    pub system_prompt: String,
    /// Conversation history (oldest first). The newest user turn is the last entry.
    pub history: Vec<ChatTurn>,
    /// Override the provider's default model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Override the provider's default completion token limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Override the provider's default sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A structured message for API-based providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// "system", "user" or "assistant".
    pub role: String,
    pub content: String,
}

impl Context {
    /// Create a context from a system prompt and a history snapshot.
    pub fn new(system_prompt: &str, history: Vec<ChatTurn>) -> Self {
        Self {
            system_prompt: system_prompt.to_string(),
            history,
            model: None,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Convert context to a role-tagged message list: one `system` turn
    /// (omitted when the prompt is empty) followed by the full history.
    pub fn to_api_messages(&self) -> Vec<ApiMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 1);

        if !self.system_prompt.is_empty() {
            messages.push(ApiMessage {
                role: Role::System.as_str().to_string(),
                content: self.system_prompt.clone(),
            });
        }

        for turn in &self.history {
            messages.push(ApiMessage {
                role: turn.role.as_str().to_string(),
                content: turn.content.clone(),
            });
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_api_messages_basic() {
        let ctx = Context::new("Be helpful.", vec![ChatTurn::user("hello")]);
        let messages = ctx.to_api_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "Be helpful.");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "hello");
    }

    #[test]
    fn test_to_api_messages_with_history() {
        let ctx = Context::new(
            "Be helpful.",
            vec![
                ChatTurn::user("Hi"),
                ChatTurn::assistant("Hello!"),
                ChatTurn::user("How are you?"),
            ],
        );
        let messages = ctx.to_api_messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[2].content, "Hello!");
        assert_eq!(messages[3].content, "How are you?");
    }

    #[test]
    fn test_to_api_messages_empty_system() {
        let ctx = Context::new("", vec![ChatTurn::user("Hi")]);
        let messages = ctx.to_api_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[test]
    fn test_context_deserialize_without_overrides() {
        let json = r#"{"system_prompt":"test","history":[{"role":"user","content":"hi"}]}"#;
        let ctx: Context = serde_json::from_str(json).unwrap();
        assert!(ctx.model.is_none());
        assert!(ctx.max_tokens.is_none());
        assert_eq!(ctx.history[0].role, Role::User);
    }
}
