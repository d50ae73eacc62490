//! The credential store seam between the auth service and persistence.

use async_trait::async_trait;
use uuid::Uuid;

use jobtrail_core::result::AppResult;
use jobtrail_database::repositories::UserRepository;
use jobtrail_entity::user::User;

/// Lookup, insert, and password update for user credentials.
///
/// `create` must be a single atomic insert guarded by a uniqueness
/// constraint and fail with `DuplicateUsername` for a taken name.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Insert a new user.
    async fn create(&self, username: &str, password_hash: &str) -> AppResult<User>;

    /// Replace a user's password hash; `NotFound` if the user is gone.
    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()>;
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_username(self, username).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }

    async fn create(&self, username: &str, password_hash: &str) -> AppResult<User> {
        UserRepository::create(self, username, password_hash).await
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        UserRepository::update_password_hash(self, id, password_hash).await
    }
}
