use axum::http::Method;
use serde_json::json;
use std::sync::Arc;

use campusdesk::{
    config::AppConfig,
    gateway::{Confirmation, Gateway, NoticeLevel, RecordingGateway},
    models::{Book, EntityId, Member},
    store::{DeleteOutcome, FetchOutcome, SubmitOutcome},
    AppContext,
};

use crate::support::{spawn, Backend};

async fn context(base_url: &str, token: Option<&str>, gateway: &RecordingGateway) -> AppContext {
    let mut config = AppConfig::default();
    config.api.base_url = format!("{}/api", base_url);
    config.auth.token = token.map(str::to_string);
    let gateway: Arc<dyn Gateway> = Arc::new(gateway.clone());
    AppContext::new(config, gateway).await.expect("Failed to build context")
}

#[tokio::test]
async fn test_book_lifecycle() {
    let backend = Backend::default();
    let url = spawn(backend.router()).await;
    let gateway = RecordingGateway::confirming();
    let ctx = context(&url, Some("secret"), &gateway).await;
    let books = &ctx.stores.books;

    assert_eq!(books.fetch_list().await, FetchOutcome::Loaded(0));

    books
        .update_draft(json!({ "title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593" }))
        .await;
    assert_eq!(books.submit_draft().await, SubmitOutcome::Created);

    let listed = books.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Dune");
    let id = listed[0].id;

    books.select_for_edit(listed[0].clone()).await;
    books.update_draft(json!({ "quantity": 3 })).await;
    assert_eq!(books.dirty_fields().await, vec!["quantity"]);
    assert_eq!(books.submit_draft().await, SubmitOutcome::Updated(EntityId::Number(id)));
    assert_eq!(backend.rows("Book")[0]["quantity"], 3);
    assert_eq!(books.draft().await, Book::default());

    gateway.answer_next(Confirmation::Cancelled);
    assert_eq!(books.delete_entity(id).await, DeleteOutcome::Cancelled);
    assert_eq!(books.list().await.len(), 1);

    assert_eq!(books.delete_entity(id).await, DeleteOutcome::Deleted);
    assert!(books.list().await.is_empty());
    assert!(backend.rows("Book").is_empty());

    let seen = backend.seen();
    assert!(seen
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer secret")));
    assert_eq!(seen.iter().filter(|r| r.method == Method::DELETE).count(), 1);
    assert!(gateway.notices_of(NoticeLevel::Error).is_empty());
}

#[tokio::test]
async fn test_requests_without_token_carry_no_authorization() {
    let backend = Backend::default();
    let url = spawn(backend.router()).await;
    let gateway = RecordingGateway::confirming();
    let ctx = context(&url, None, &gateway).await;

    ctx.stores.branches.fetch_list().await;

    let seen = backend.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].resource, "Branch");
    assert!(seen[0].authorization.is_none());

    ctx.auth.set_token("late-token").await.unwrap();
    ctx.stores.branches.fetch_list().await;
    assert_eq!(backend.seen()[1].authorization.as_deref(), Some("Bearer late-token"));
}

#[tokio::test]
async fn test_string_ids_round_trip() {
    let backend = Backend::default();
    backend.seed(
        "Member",
        vec![json!({ "id": "m-1", "name": "Priya Nair", "houseId": 1, "joinedOn": "2021-04-12T00:00:00Z" })],
    );
    let url = spawn(backend.router()).await;
    let gateway = RecordingGateway::confirming();
    let ctx = context(&url, None, &gateway).await;
    let members = &ctx.stores.members;

    members.fetch_list().await;
    assert!(members.select_by_id(&EntityId::from("m-1")).await);
    assert_eq!(members.draft().await.joined_on.as_deref(), Some("2021-04-12"));

    members.edit_draft(|m: &mut Member| m.role = Some("secretary".into())).await;
    assert_eq!(members.submit_draft().await, SubmitOutcome::Updated(EntityId::from("m-1")));
    assert_eq!(members.list().await[0].role.as_deref(), Some("secretary"));
}

#[tokio::test]
async fn test_reserved_characters_in_text_ids_reach_the_right_record() {
    let backend = Backend::default();
    backend.seed(
        "Member",
        vec![
            json!({ "id": "a/b", "name": "Imran Khan", "houseId": 1 }),
            json!({ "id": "flat#2", "name": "Neha Joshi", "houseId": 2 }),
            json!({ "id": "flat", "name": "Arun Pillai", "houseId": 3 }),
        ],
    );
    let url = spawn(backend.router()).await;
    let gateway = RecordingGateway::confirming();
    let ctx = context(&url, None, &gateway).await;
    let members = &ctx.stores.members;

    assert_eq!(members.delete_entity("a/b").await, DeleteOutcome::Deleted);
    assert_eq!(members.delete_entity("flat#2").await, DeleteOutcome::Deleted);

    let left = backend.rows("Member");
    assert_eq!(left.len(), 1);
    assert_eq!(left[0]["id"], "flat");
    assert_eq!(members.list().await[0].name, "Arun Pillai");
}

#[tokio::test]
async fn test_null_columns_do_not_drop_the_list() {
    let backend = Backend::default();
    backend.seed(
        "Book",
        vec![
            json!({ "id": 1, "title": "Emma", "author": "Jane Austen", "isbn": "1", "quantity": 2 }),
            json!({ "id": 2, "title": "Kim", "author": null, "isbn": null, "quantity": null }),
        ],
    );
    let url = spawn(backend.router()).await;
    let gateway = RecordingGateway::confirming();
    let ctx = context(&url, None, &gateway).await;

    assert_eq!(ctx.stores.books.fetch_list().await, FetchOutcome::Loaded(2));
    let books = ctx.stores.books.list().await;
    assert_eq!(books[1].title, "Kim");
    assert_eq!(books[1].author, "");
    assert!(gateway.notices_of(NoticeLevel::Error).is_empty());
}

#[tokio::test]
async fn test_server_errors_surface_as_notices() {
    let backend = Backend::default();
    let url = spawn(backend.router()).await;
    let gateway = RecordingGateway::confirming();
    let ctx = context(&url, None, &gateway).await;

    backend.fail_all();
    ctx.stores
        .owners
        .update_draft(json!({ "name": "Kiran Shah", "phone": "+91 98200 11111" }))
        .await;

    assert_eq!(ctx.stores.owners.submit_draft().await, SubmitOutcome::Failed);
    assert_eq!(ctx.stores.owners.draft().await.name, "Kiran Shah");

    let notice = gateway.last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Something went wrong");
}

#[tokio::test]
async fn test_resource_override_targets_other_backend() {
    let library = Backend::default();
    let housing = Backend::default();
    housing.seed("House", vec![json!({ "id": 1, "houseNo": "A-101", "societyId": 1 })]);
    let library_url = spawn(library.router()).await;
    let housing_url = spawn(housing.router()).await;

    let mut config = AppConfig::default();
    config.api.base_url = format!("{}/api", library_url);
    config
        .api
        .overrides
        .insert("House".to_string(), format!("{}/api", housing_url));
    let gateway: Arc<dyn Gateway> = Arc::new(RecordingGateway::confirming());
    let ctx = AppContext::new(config, gateway).await.unwrap();

    ctx.stores.fetch_all().await;

    assert_eq!(ctx.stores.houses.list().await[0].house_no, "A-101");
    assert_eq!(housing.seen().len(), 1);
    assert_eq!(library.seen().len(), 11);
}
