//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::{AuthorName, AuthorNamePatch, Post, PostPatch};

/// Author name as it appears on the wire (`firstName` / `lastName`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorDto> for AuthorName {
    fn from(dto: AuthorDto) -> Self {
        AuthorName::new(dto.first_name, dto.last_name)
    }
}

/// Request to create a post. All fields are required; a missing field fails
/// deserialization before the handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
}

/// Partial author name in an update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatchDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to update a post. Any subset of fields may be supplied; omitted
/// fields keep their stored values. A body `id`, if sent, is ignored in
/// favor of the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPatchDto>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        PostPatch {
            title: req.title,
            content: req.content,
            author: req.author.map(|a| AuthorNamePatch {
                first_name: a.first_name,
                last_name: a.last_name,
            }),
        }
    }
}

/// External representation of a post.
///
/// `author` is the derived display string, and `id` is the store identifier
/// rendered as an opaque string. Applied uniformly to list and create
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.display_name(),
            title: post.title,
            content: post.content,
        }
    }
}
