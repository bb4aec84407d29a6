use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author name as stored on a post.
///
/// The display form (`"First Last"`) is derived, never stored, and never
/// parsed back into parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Derived display form: `first_name + " " + last_name`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - one blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. The id is assigned here and immutable afterwards.
    pub fn new(title: String, content: String, author: AuthorName) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Field-level patch for an author name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorNamePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Field-level patch for a post.
///
/// Only the supplied fields are overwritten; everything else keeps its prior
/// value. This is an overwrite of named fields, not a document replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorNamePatch>,
}

impl PostPatch {
    /// True when the patch names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self
                .author
                .as_ref()
                .is_none_or(|a| a.first_name.is_none() && a.last_name.is_none())
    }

    /// Apply the patch to a post, overwriting exactly the supplied fields
    /// and bumping `updated_at`.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            if let Some(first) = author.first_name {
                post.author.first_name = first;
            }
            if let Some(last) = author.last_name {
                post.author.last_name = last;
            }
        }
        post.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(
            "Ten things".to_string(),
            "You will not believe number four.".to_string(),
            AuthorName::new("Mason", "Tang"),
        )
    }

    #[test]
    fn display_name_concatenates_parts() {
        let author = AuthorName::new("Mason", "Tang");
        assert_eq!(author.display_name(), "Mason Tang");
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut post = sample_post();
        let patch = PostPatch {
            title: Some("fire".to_string()),
            ..Default::default()
        };
        patch.apply(&mut post);

        assert_eq!(post.title, "fire");
        assert_eq!(post.content, "You will not believe number four.");
        assert_eq!(post.author, AuthorName::new("Mason", "Tang"));
    }

    #[test]
    fn patch_updates_author_parts_independently() {
        let mut post = sample_post();
        let patch = PostPatch {
            author: Some(AuthorNamePatch {
                last_name: Some("Wong".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        patch.apply(&mut post);

        assert_eq!(post.author.first_name, "Mason");
        assert_eq!(post.author.last_name, "Wong");
    }

    #[test]
    fn full_patch_overwrites_everything_but_id() {
        let mut post = sample_post();
        let id = post.id;
        let patch = PostPatch {
            title: Some("fire".to_string()),
            content: Some("alot of stuff to read".to_string()),
            author: Some(AuthorNamePatch {
                first_name: Some("Grace".to_string()),
                last_name: Some("Hopper".to_string()),
            }),
        };
        patch.apply(&mut post);

        assert_eq!(post.id, id);
        assert_eq!(post.title, "fire");
        assert_eq!(post.content, "alot of stuff to read");
        assert_eq!(post.author.display_name(), "Grace Hopper");
    }

    #[test]
    fn empty_patch_detection() {
        assert!(PostPatch::default().is_empty());
        assert!(
            PostPatch {
                author: Some(AuthorNamePatch::default()),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !PostPatch {
                title: Some("fire".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
