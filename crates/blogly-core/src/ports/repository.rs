use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, User, UserFields};
use crate::error::RepoError;

/// User repository.
///
/// Implementations own the cascade: deleting a user removes its posts in
/// the same unit of work.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    /// All users ordered by last name, then first name.
    async fn list_by_name(&self) -> Result<Vec<User>, RepoError>;

    /// Insert a user, assigning a fresh ID.
    async fn create(&self, fields: UserFields) -> Result<User, RepoError>;

    /// Replace every field of an existing user.
    async fn update(&self, id: i32, fields: UserFields) -> Result<User, RepoError>;

    /// Delete a user together with all of its posts, atomically.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Newest posts first, at most `limit` of them.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Posts owned by a user, newest first.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Insert a post. Fails with [`RepoError::Constraint`] when the owner
    /// does not exist.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, RepoError>;

    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
