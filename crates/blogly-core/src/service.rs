//! Blog operations over the repository ports.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges, User, UserFields};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, UserRepository};

const USER: &str = "User";
const POST: &str = "Post";

/// Entry point used by request handlers.
///
/// Each method is a single unit of work against the repositories.
#[derive(Clone)]
pub struct BlogService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    pub async fn get_user(&self, id: i32) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found(USER, id))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.list_by_name().await?)
    }

    pub async fn create_user(&self, fields: UserFields) -> Result<User, DomainError> {
        let user = self.users.create(fields).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update_user(&self, id: i32, fields: UserFields) -> Result<User, DomainError> {
        let user = self
            .users
            .update(id, fields)
            .await
            .map_err(|e| DomainError::from_repo(e, USER, id))?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete a user and, with it, every post the user wrote.
    pub async fn delete_user(&self, id: i32) -> Result<(), DomainError> {
        self.users
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, USER, id))?;
        tracing::info!(user_id = id, "User and posts deleted");
        Ok(())
    }

    pub async fn get_post(&self, id: i32) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found(POST, id))
    }

    pub async fn list_recent_posts(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list_recent(limit).await?)
    }

    pub async fn posts_by_user(&self, user_id: i32) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_user_id(user_id).await?)
    }

    /// Create a post under an existing user.
    ///
    /// The owner is checked first so a missing user surfaces as `NotFound`
    /// rather than as a constraint failure.
    pub async fn create_post(&self, post: NewPost) -> Result<Post, DomainError> {
        let owner = post.user_id;
        self.get_user(owner).await?;

        let post = self.posts.create(post).await.map_err(|e| match e {
            // owner deleted between the check and the insert
            RepoError::Constraint(_) => DomainError::not_found(USER, owner),
            other => other.into(),
        })?;
        tracing::info!(post_id = post.id, user_id = owner, "Post created");
        Ok(post)
    }

    pub async fn update_post(&self, id: i32, changes: PostChanges) -> Result<Post, DomainError> {
        let post = self
            .posts
            .update(id, changes)
            .await
            .map_err(|e| DomainError::from_repo(e, POST, id))?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    pub async fn delete_post(&self, id: i32) -> Result<(), DomainError> {
        self.posts
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, POST, id))?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}
