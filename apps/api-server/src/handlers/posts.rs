//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Post, PostPatch};
use quill_core::ports::{BaseRepository, PostRepository};
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Required fields are enforced by deserialization; present-but-empty
    // values are rejected here.
    require_non_empty("title", &req.title)?;
    require_non_empty("content", &req.content)?;
    require_non_empty("author.firstName", &req.author.first_name)?;
    require_non_empty("author.lastName", &req.author.last_name)?;

    let post = Post::new(req.title, req.content, req.author.into());
    let saved = state.posts.save(post).await?;

    tracing::debug!(post_id = %saved.id, "Created post");

    Ok(HttpResponse::Created().json(PostResponse::from(saved)))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Omitted fields keep their stored values; supplied fields must not be
    // emptied out.
    if let Some(title) = &req.title {
        require_non_empty("title", title)?;
    }
    if let Some(content) = &req.content {
        require_non_empty("content", content)?;
    }
    if let Some(author) = &req.author {
        if let Some(first) = &author.first_name {
            require_non_empty("author.firstName", first)?;
        }
        if let Some(last) = &author.last_name {
            require_non_empty("author.lastName", last)?;
        }
    }

    let updated = state.posts.update(id, PostPatch::from(req)).await?;

    tracing::debug!(post_id = %updated.id, "Updated post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;

    tracing::debug!(post_id = %id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}
