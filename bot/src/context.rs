//! The handle through which commands talk back to the chat

/// Where a command was invoked from and how to reply to it
pub trait ChatContext {
    /// Display name of the user who sent the command
    fn author(&self) -> &str;

    /// Sends one message to the channel the command came from
    fn send(&mut self, text: &str) -> anyhow::Result<()>;
}

/// In-memory context collecting every message sent through it
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    author: String,
    messages: Vec<String>,
}

impl Transcript {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Takes the messages sent so far, leaving the transcript empty
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl ChatContext for Transcript {
    fn author(&self) -> &str {
        &self.author
    }

    fn send(&mut self, text: &str) -> anyhow::Result<()> {
        self.messages.push(text.to_owned());
        Ok(())
    }
}
