use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostPatch};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` when no
    /// entity with that ID exists.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, ordered by creation time.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Bulk insert, used for seeding.
    async fn insert_many(&self, posts: Vec<Post>) -> Result<(), RepoError>;

    /// Atomically overwrite the fields named by the patch on the post with
    /// the given ID, leaving all other fields untouched. Returns the updated
    /// post, or `RepoError::NotFound` when the ID is unknown.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError>;
}
