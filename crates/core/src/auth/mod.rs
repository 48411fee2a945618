//! Admin authentication: password sign-in, session tokens and the role
//! check applied to every `/admin` route.

pub mod password;
pub mod session;

use uuid::Uuid;

use crate::store::{Profile, ProfileStore, StoreError};

pub use password::{hash_password, verify_password};
pub use session::{SessionClaims, SessionKeys, SESSION_COOKIE};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hash error: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a request is allowed to see of the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// No valid session.
    Anonymous,
    /// Signed in, but the profile is missing or not an admin.
    NotAdmin(Uuid),
    Admin(Profile),
}

/// Resolve the access level of a verified session.
///
/// A profile lookup that fails is treated like a missing profile.
pub async fn authorize(profiles: &dyn ProfileStore, claims: Option<&SessionClaims>) -> Access {
    let Some(claims) = claims else {
        return Access::Anonymous;
    };

    match profiles.profile(claims.sub).await {
        Ok(Some(profile)) if profile.is_admin() => Access::Admin(profile),
        Ok(_) => Access::NotAdmin(claims.sub),
        Err(err) => {
            tracing::warn!(profile_id = %claims.sub, error = %err, "profile lookup failed");
            Access::NotAdmin(claims.sub)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Admin { token: String, profile: Profile },
    /// Credentials were valid but the profile is not an admin. No session
    /// is kept.
    NotAdmin,
}

/// Check email and password, then the admin role.
pub async fn login(
    profiles: &dyn ProfileStore,
    keys: &SessionKeys,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AuthError> {
    let credentials = profiles
        .credentials(email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password, &credentials.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    let claims = keys.claims_for(credentials.id);
    match authorize(profiles, Some(&claims)).await {
        Access::Admin(profile) => {
            let token = keys.encode(&claims)?;
            tracing::info!(profile_id = %profile.id, "admin signed in");
            Ok(LoginOutcome::Admin { token, profile })
        }
        _ => {
            tracing::info!(profile_id = %credentials.id, "non-admin sign-in rejected");
            Ok(LoginOutcome::NotAdmin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, ADMIN_ROLE};
    use chrono::Duration;

    fn keys() -> SessionKeys {
        SessionKeys::new(b"auth-tests", Duration::hours(1))
    }

    fn store_with(email: &str, role: &str, password: &str) -> (MemoryStore, Uuid) {
        let store = MemoryStore::new();
        let id = store.add_profile(email, role, hash_password(password).unwrap());
        (store, id)
    }

    #[tokio::test]
    async fn no_session_is_anonymous() {
        let store = MemoryStore::new();
        assert_eq!(authorize(&store, None).await, Access::Anonymous);
    }

    #[tokio::test]
    async fn role_decides_access() {
        let (store, editor) = store_with("editor@nounstudio.dz", "editor", "pw");
        let admin = store.add_profile("admin@nounstudio.dz", ADMIN_ROLE, String::new());
        let keys = keys();

        let access = authorize(&store, Some(&keys.claims_for(editor))).await;
        assert_eq!(access, Access::NotAdmin(editor));

        let access = authorize(&store, Some(&keys.claims_for(admin))).await;
        assert!(matches!(access, Access::Admin(profile) if profile.id == admin));

        let ghost = Uuid::new_v4();
        let access = authorize(&store, Some(&keys.claims_for(ghost))).await;
        assert_eq!(access, Access::NotAdmin(ghost));
    }

    #[tokio::test]
    async fn lookup_failure_is_not_admin() {
        let (store, admin) = store_with("admin@nounstudio.dz", ADMIN_ROLE, "pw");
        store.set_offline(true);
        let access = authorize(&store, Some(&keys().claims_for(admin))).await;
        assert_eq!(access, Access::NotAdmin(admin));
    }

    #[tokio::test]
    async fn admin_login_issues_token() {
        let (store, admin) = store_with("admin@nounstudio.dz", ADMIN_ROLE, "s3cret");
        let keys = keys();

        let outcome = login(&store, &keys, " Admin@NounStudio.dz ", "s3cret")
            .await
            .unwrap();
        let LoginOutcome::Admin { token, profile } = outcome else {
            panic!("expected admin login");
        };
        assert_eq!(profile.id, admin);
        assert_eq!(keys.verify(&token).unwrap().sub, admin);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_invalid() {
        let (store, _) = store_with("admin@nounstudio.dz", ADMIN_ROLE, "s3cret");
        let keys = keys();

        let err = login(&store, &keys, "admin@nounstudio.dz", "nope").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        let err = login(&store, &keys, "who@nounstudio.dz", "s3cret").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn non_admin_login_keeps_no_session() {
        let (store, _) = store_with("client@example.com", "client", "pw");
        let outcome = login(&store, &keys(), "client@example.com", "pw").await.unwrap();
        assert_eq!(outcome, LoginOutcome::NotAdmin);
    }
}
