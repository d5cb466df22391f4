use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::auth::model::PhoneVerification;

/// How long a verification challenge stays resumable.
pub const VERIFICATION_TTL_MINUTES: i64 = 10;

/// Holds the active phone-verification challenges between the send-code and
/// verify-code steps, keyed by request id. Owned by the auth component and
/// shared by its two use cases; nothing here is process-global.
#[derive(Default)]
pub struct VerificationSessionStore {
    sessions: RwLock<HashMap<Uuid, PhoneVerification>>,
}

impl VerificationSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, verification: PhoneVerification) {
        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.insert(verification.request_id, verification);
    }

    /// Returns the live challenge for `request_id`. Expired challenges are
    /// dropped on access and reported as absent.
    pub fn get(&self, request_id: Uuid) -> Option<PhoneVerification> {
        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let expired = sessions.get(&request_id).is_some_and(|v| {
            Utc::now() - v.issued_at > Duration::minutes(VERIFICATION_TTL_MINUTES)
        });
        if expired {
            sessions.remove(&request_id);
            return None;
        }

        sessions.get(&request_id).cloned()
    }

    pub fn remove(&self, request_id: Uuid) {
        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.remove(&request_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verification() -> PhoneVerification {
        PhoneVerification::new("+966501234567".to_string(), "session-token".to_string())
    }

    #[test]
    fn should_resume_a_stored_challenge_by_request_id() {
        let store = VerificationSessionStore::new();
        let v = verification();
        let id = v.request_id;
        store.insert(v.clone());

        assert_eq!(store.get(id), Some(v));
    }

    #[test]
    fn should_report_unknown_request_ids_as_absent() {
        let store = VerificationSessionStore::new();
        assert_eq!(store.get(Uuid::new_v4()), None);
    }

    #[test]
    fn should_drop_expired_challenges_on_access() {
        let store = VerificationSessionStore::new();
        let mut v = verification();
        v.issued_at = Utc::now() - Duration::minutes(VERIFICATION_TTL_MINUTES + 1);
        let id = v.request_id;
        store.insert(v);

        assert_eq!(store.get(id), None);
    }

    #[test]
    fn should_forget_removed_challenges() {
        let store = VerificationSessionStore::new();
        let v = verification();
        let id = v.request_id;
        store.insert(v);
        store.remove(id);

        assert_eq!(store.get(id), None);
    }
}
