//! Demo Authentication
//!
//! Cosmetic sign-in for the demo: any non-empty credentials produce a
//! session, the token is opaque and never checked by anything. The
//! session blob lives in storage so a reload stays "signed in".
//! Nothing here is access control.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::models::{Session, User, UserSettings};
use crate::storage::{keys, StorageHandle};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Restores a stored session. A corrupt blob is dropped and treated as
/// signed out.
pub fn load_session(storage: &StorageHandle) -> Option<Session> {
    let raw = storage.load(keys::SESSION).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("[auth] stored session is corrupt, discarding: {err}");
            let _ = storage.remove(keys::SESSION);
            None
        }
    }
}

pub fn save_session(storage: &StorageHandle, session: &Session) {
    match serde_json::to_string(session) {
        Ok(json) => {
            if let Err(err) = storage.save(keys::SESSION, &json) {
                log::warn!("[auth] session not persisted: {err}");
            }
        }
        Err(err) => log::warn!("[auth] session not serialized: {err}"),
    }
}

pub fn login(
    storage: &StorageHandle,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let email = required("email", email)?;
    required("password", password)?;
    let session = build_session(display_name(&email), email);
    save_session(storage, &session);
    Ok(session)
}

pub fn register(
    storage: &StorageHandle,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let name = required("name", name)?;
    let email = required("email", email)?;
    required("password", password)?;
    let session = build_session(name, email);
    save_session(storage, &session);
    Ok(session)
}

pub fn logout(storage: &StorageHandle) {
    if let Err(err) = storage.remove(keys::SESSION) {
        log::warn!("[auth] session not cleared: {err}");
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AuthError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn build_session(name: String, email: String) -> Session {
    Session {
        token: demo_token(&email),
        user: User {
            id: 1,
            name,
            email,
            plan: "Pilot".to_string(),
            settings: UserSettings::default(),
        },
    }
}

/// "Autofill" display name from the email local part.
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        email.to_string()
    } else {
        words.join(" ")
    }
}

/// Opaque marker, not a credential.
fn demo_token(email: &str) -> String {
    let mut hasher = DefaultHasher::new();
    email.hash(&mut hasher);
    let millis = chrono::Utc::now().timestamp_millis();
    format!("demo-{:08x}-{millis}", hasher.finish() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn memory() -> StorageHandle {
        StorageHandle::new(MemoryStorage::new())
    }

    #[test]
    fn test_login_requires_both_fields() {
        let storage = memory();
        assert_eq!(
            login(&storage, "", "secret"),
            Err(AuthError::MissingField("email"))
        );
        assert_eq!(
            login(&storage, "a@b.in", "   "),
            Err(AuthError::MissingField("password"))
        );
        assert!(load_session(&storage).is_none());
    }

    #[test]
    fn test_login_persists_a_restorable_session() {
        let storage = memory();
        let session = login(&storage, "asha.chavan@gramsetu.in", "pw").unwrap();
        assert_eq!(session.user.name, "Asha Chavan");
        assert_eq!(load_session(&storage), Some(session));
    }

    #[test]
    fn test_register_keeps_the_given_name() {
        let storage = memory();
        let session = register(&storage, "Kavita Shinde", "kavita@velhe.in", "pw").unwrap();
        assert_eq!(session.user.name, "Kavita Shinde");
        assert_eq!(
            register(&storage, " ", "kavita@velhe.in", "pw"),
            Err(AuthError::MissingField("name"))
        );
    }

    #[test]
    fn test_logout_clears_the_session() {
        let storage = memory();
        login(&storage, "x@y.in", "pw").unwrap();
        logout(&storage);
        assert!(load_session(&storage).is_none());
    }

    #[test]
    fn test_corrupt_session_reads_as_signed_out() {
        let storage = memory();
        storage.save(keys::SESSION, "{oops").unwrap();
        assert!(load_session(&storage).is_none());
        assert_eq!(storage.load(keys::SESSION).unwrap(), None);
    }

    #[test]
    fn test_tokens_differ_per_email() {
        let storage = memory();
        let a = login(&storage, "a@gramsetu.in", "pw").unwrap();
        let b = login(&storage, "b@gramsetu.in", "pw").unwrap();
        assert_ne!(a.token, b.token);
    }
}
