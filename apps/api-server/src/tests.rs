//! Integration tests driving the HTTP surface end to end.
//!
//! Each test builds its own service around a fresh in-memory store, seeds it,
//! and asserts both the HTTP responses and the persisted state afterwards.

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::json;
use uuid::Uuid;

use quill_core::domain::{AuthorName, Post};
use quill_core::ports::{BaseRepository, PostRepository};
use quill_infra::database::InMemoryPostRepository;
use quill_shared::dto::PostResponse;

use crate::handlers;
use crate::state::AppState;

const SEED_COUNT: usize = 11;

fn seed_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| {
            Post::new(
                format!("Seeded title {i}"),
                format!("Seeded content number {i}, long enough to read."),
                AuthorName::new(format!("First{i}"), format!("Last{i}")),
            )
        })
        .collect()
}

async fn seeded_repo(count: usize) -> Arc<InMemoryPostRepository> {
    let repo = Arc::new(InMemoryPostRepository::new());
    repo.insert_many(seed_posts(count)).await.unwrap();
    repo
}

/// Build a test service around the given repository.
macro_rules! spawn_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::with_repository($repo)))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn list_returns_all_seeded_posts_with_expected_fields() {
    let repo = seeded_repo(SEED_COUNT).await;
    let app = spawn_app!(repo.clone());

    let req = test::TestRequest::get().uri("/posts").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let body: Vec<PostResponse> = test::read_body_json(res).await;
    assert_eq!(body.len(), SEED_COUNT);

    // Same order as the store; every item carries the external shape with the
    // author flattened to a display string.
    let persisted = repo.find_all().await.unwrap();
    for (returned, stored) in body.iter().zip(&persisted) {
        assert_eq!(returned.id, stored.id.to_string());
        assert_eq!(returned.title, stored.title);
        assert_eq!(returned.content, stored.content);
        assert_eq!(
            returned.author,
            format!("{} {}", stored.author.first_name, stored.author.last_name)
        );
    }
}

#[actix_web::test]
async fn list_on_empty_store_returns_empty_array() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = spawn_app!(repo);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let body: Vec<PostResponse> = test::read_body_json(res).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn create_adds_a_new_post() {
    let repo = seeded_repo(SEED_COUNT).await;
    let app = spawn_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "T",
            "content": "C",
            "author": {"firstName": "Mason", "lastName": "Tang"}
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);

    let body: PostResponse = test::read_body_json(res).await;
    assert_eq!(body.title, "T");
    assert_eq!(body.content, "C");
    assert_eq!(body.author, "Mason Tang");

    // Read-after-write: retrievable by the returned id, with the structured
    // author parts intact in the store.
    let id: Uuid = body.id.parse().expect("id is a uuid string");
    let stored = repo.find_by_id(id).await.unwrap().expect("post persisted");
    assert_eq!(stored.title, "T");
    assert_eq!(stored.content, "C");
    assert_eq!(stored.author, AuthorName::new("Mason", "Tang"));

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), SEED_COUNT + 1);
}

#[actix_web::test]
async fn create_rejects_missing_required_field() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = spawn_app!(repo.clone());

    // No content field at all
    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "T",
            "author": {"firstName": "Mason", "lastName": "Tang"}
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn create_rejects_empty_required_field() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = spawn_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "",
            "content": "C",
            "author": {"firstName": "Mason", "lastName": "Tang"}
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 400);

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn update_overwrites_fields_you_send_over() {
    let repo = seeded_repo(SEED_COUNT).await;
    let app = spawn_app!(repo.clone());

    let target = repo.find_all().await.unwrap().remove(0);

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", target.id))
        .set_json(json!({
            "title": "fire",
            "content": "alot of stuff to read",
            "author": {"firstName": "Mason", "lastName": "Tang"}
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 204);
    assert!(test::read_body(res).await.is_empty());

    let stored = repo.find_by_id(target.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "fire");
    assert_eq!(stored.content, "alot of stuff to read");
    assert_eq!(stored.author, AuthorName::new("Mason", "Tang"));
}

#[actix_web::test]
async fn update_keeps_fields_you_do_not_send() {
    let repo = seeded_repo(SEED_COUNT).await;
    let app = spawn_app!(repo.clone());

    let target = repo.find_all().await.unwrap().remove(0);

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", target.id))
        .set_json(json!({"title": "fire"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 204);

    let stored = repo.find_by_id(target.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "fire");
    assert_eq!(stored.content, target.content);
    assert_eq!(stored.author, target.author);
}

#[actix_web::test]
async fn update_with_empty_body_is_a_no_op() {
    let repo = seeded_repo(1).await;
    let app = spawn_app!(repo.clone());

    let target = repo.find_all().await.unwrap().remove(0);

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", target.id))
        .set_json(json!({}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 204);

    let stored = repo.find_by_id(target.id).await.unwrap().unwrap();
    assert_eq!(stored.title, target.title);
    assert_eq!(stored.content, target.content);
}

#[actix_web::test]
async fn update_unknown_id_is_not_found() {
    let repo = seeded_repo(SEED_COUNT).await;
    let app = spawn_app!(repo);

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .set_json(json!({"title": "fire"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);
}

#[actix_web::test]
async fn delete_removes_a_post_by_id() {
    let repo = seeded_repo(SEED_COUNT).await;
    let app = spawn_app!(repo.clone());

    let target = repo.find_all().await.unwrap().remove(0);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 204);
    assert!(test::read_body(res).await.is_empty());

    assert!(repo.find_by_id(target.id).await.unwrap().is_none());
    assert_eq!(repo.find_all().await.unwrap().len(), SEED_COUNT - 1);
}

#[actix_web::test]
async fn delete_already_deleted_id_is_not_found() {
    let repo = seeded_repo(1).await;
    let app = spawn_app!(repo.clone());

    let target = repo.find_all().await.unwrap().remove(0);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", target.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn malformed_id_segment_is_a_client_error() {
    let repo = seeded_repo(1).await;
    let app = spawn_app!(repo);

    let req = test::TestRequest::delete()
        .uri("/posts/not-a-uuid")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.status().is_client_error());
}
