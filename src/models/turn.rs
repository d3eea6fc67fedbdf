use serde::{Deserialize, Serialize};

/// One exchange in the conversation. The assistant field stays empty from the
/// moment the user message is appended until the model response arrives.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

impl Turn {
    pub fn pending(user: impl Into<String>) -> Self {
        Turn {
            user: user.into(),
            assistant: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.assistant.is_empty()
    }
}
