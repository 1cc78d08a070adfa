use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

/// Identity presented to the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub name: Option<String>,
}

/// Settings for the chat backend connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub api_key: String,
}

/// Transport to the hosted chat service.
pub trait ChatBackend: Send + Sync {
    fn connect_user(&self, api_key: &str, user: &ChatUser, token: &str)
        -> Result<(), ChatError>;
    fn disconnect_user(&self, user: &ChatUser) -> Result<(), ChatError>;
}

/// Issues user tokens for the chat service (an edge function in production).
pub trait ChatTokenProvider: Send + Sync {
    fn token_for(&self, user: &ChatUser) -> Result<String, ChatError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat transport unavailable: {0}")]
    Transport(String),
    #[error("chat token rejected: {0}")]
    Unauthorized(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatSessionError {
    #[error("chat api key is not configured")]
    MissingApiKey,
    #[error("could not obtain chat token: {0}")]
    Token(#[source] ChatError),
    #[error(transparent)]
    Backend(#[from] ChatError),
}

/// Explicit handle on the one chat connection a client holds at a time.
///
/// Connecting as a different user tears down the previous connection first.
pub struct ChatSession<B, T> {
    backend: Arc<B>,
    tokens: Arc<T>,
    config: ChatConfig,
    current: Mutex<Option<ChatUser>>,
}

impl<B, T> ChatSession<B, T>
where
    B: ChatBackend,
    T: ChatTokenProvider,
{
    pub fn new(backend: Arc<B>, tokens: Arc<T>, config: ChatConfig) -> Self {
        Self {
            backend,
            tokens,
            config,
            current: Mutex::new(None),
        }
    }

    /// Connects `user`, replacing whoever is connected now.
    pub fn connect(&self, user: &ChatUser) -> Result<(), ChatSessionError> {
        let mut current = self.lock();
        self.reconnect(&mut current, user)
    }

    /// Connects `user` unless that user already holds the connection.
    pub fn ensure_connected(&self, user: &ChatUser) -> Result<(), ChatSessionError> {
        let mut current = self.lock();
        if current.as_ref().is_some_and(|active| active.id == user.id) {
            return Ok(());
        }
        self.reconnect(&mut current, user)
    }

    pub fn disconnect(&self) -> Result<(), ChatSessionError> {
        let mut current = self.lock();
        if let Some(active) = current.as_ref() {
            tracing::info!(user_id = %active.id, "disconnecting chat user");
            self.backend.disconnect_user(active)?;
            *current = None;
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<ChatUser> {
        self.lock().clone()
    }

    fn reconnect(
        &self,
        current: &mut Option<ChatUser>,
        user: &ChatUser,
    ) -> Result<(), ChatSessionError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ChatSessionError::MissingApiKey);
        }

        // The previous user stays recorded until the backend confirms the disconnect.
        if let Some(active) = current.as_ref() {
            tracing::info!(user_id = %active.id, "switching chat user");
            self.backend.disconnect_user(active)?;
            *current = None;
        }

        let token = self
            .tokens
            .token_for(user)
            .map_err(ChatSessionError::Token)?;
        self.backend
            .connect_user(&self.config.api_key, user, &token)?;
        tracing::info!(user_id = %user.id, "chat user connected");
        *current = Some(user.clone());
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<ChatUser>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
