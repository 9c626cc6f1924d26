use std::sync::Arc;

use campusdesk::{
    api,
    client::{ApiClient, AuthState},
    gateway::RecordingGateway,
    models::{House, Member},
    store::{EntityStore, FetchOutcome, StoreConfig},
};

use crate::support::spawn;

#[tokio::test]
async fn test_stores_read_fixture_collections() {
    let url = spawn(api::router()).await;
    let client = Arc::new(ApiClient::with_client(reqwest::Client::new(), url, AuthState::default()));
    let gateway = Arc::new(RecordingGateway::confirming());

    let members: EntityStore<Member> = EntityStore::new(
        StoreConfig::for_entity().with_path("/api/mock/members"),
        client.clone(),
        gateway.clone(),
    );
    assert_eq!(members.fetch_list().await, FetchOutcome::Loaded(3));
    assert_eq!(members.list().await[0].name, "Priya Nair");

    let houses: EntityStore<House> = EntityStore::new(
        StoreConfig::for_entity().with_path("/api/mock/houses"),
        client,
        gateway.clone(),
    );
    assert_eq!(houses.fetch_list().await, FetchOutcome::Loaded(3));
    assert!(gateway.notices().is_empty());
}

#[tokio::test]
async fn test_missing_collection_reports_failure() {
    let url = spawn(api::router()).await;
    let client = Arc::new(ApiClient::with_client(reqwest::Client::new(), url, AuthState::default()));
    let gateway = Arc::new(RecordingGateway::confirming());

    let store: EntityStore<House> = EntityStore::new(
        StoreConfig::for_entity().with_path("/api/mock/parking"),
        client,
        gateway.clone(),
    );
    assert_eq!(store.fetch_list().await, FetchOutcome::Failed);
    assert_eq!(gateway.notices().len(), 1);
}
