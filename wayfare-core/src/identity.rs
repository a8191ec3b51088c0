use wayfare_shared::User;

/// Provides the signed-in traveler for the current session. The planner
/// only cares whether a user is present at all.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// In-memory stand-in for a real identity backend. Holds at most one
/// signed-in user for the lifetime of the provider.
pub struct MockSessionProvider {
    user: Option<User>,
}

impl MockSessionProvider {
    /// Signed in as the demo account
    pub fn signed_in() -> Self {
        Self {
            user: Some(User::new(
                "user123".to_string(),
                "Demo User".to_string(),
                "demo@wayfare.example".to_string(),
            )),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }
}

impl SessionProvider for MockSessionProvider {
    fn current_user(&self) -> Option<User> {
        if let Some(user) = &self.user {
            tracing::debug!("Resolved session for user: {}", user.id);
        }
        self.user.clone()
    }
}
