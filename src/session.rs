//! Session Store
//!
//! Owns the signed-in user and bearer token and mirrors them to durable
//! storage. Token expiry is the server's business: an expired token just
//! makes the next API call fail.

use crate::error::StorageError;
use crate::models::User;
use crate::storage::KeyValueStorage;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Empty store; call `load` to restore a persisted session
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Persist token and user together. If the second write fails the
    /// first is rolled back and memory is left untouched.
    pub fn save(&mut self, token: &str, user: User) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string(&user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(TOKEN_KEY, token)?;
        if let Err(e) = self.storage.set(USER_KEY, &serialized) {
            self.storage.remove(TOKEN_KEY);
            return Err(e);
        }
        log::info!(target: "Session", "saved session for {}", user.email);
        self.current = Some(Session {
            token: token.to_string(),
            user,
        });
        Ok(())
    }

    /// Restore from storage. Missing, partial or corrupt data leaves the
    /// session empty and wipes the leftovers.
    pub fn load(&mut self) {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.storage.get(USER_KEY);

        self.current = match (token, user) {
            (None, None) => None,
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    log::warn!(target: "Session", "discarding corrupt stored user: {}", e);
                    self.wipe();
                    None
                }
            },
            _ => {
                log::warn!(target: "Session", "discarding partial stored session");
                self.wipe();
                None
            }
        };
    }

    /// Remove every trace of the session
    pub fn clear(&mut self) {
        self.wipe();
        self.current = None;
    }

    fn wipe(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// `Authorization` header value, if signed in
    pub fn auth_header(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|session| format!("Bearer {}", session.token))
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|session| &session.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|session| session.token.as_str())
    }
}
