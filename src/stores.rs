//! One entity store per resource of the front-end

use std::{sync::Arc, time::Duration};

use crate::{
    client::{ApiClient, AuthState},
    config::ApiConfig,
    error::AppResult,
    gateway::Gateway,
    models::{
        Book, BookReport, Branch, Entity, House, IssueBook, Member, Owner, Penalty, Publication,
        ReturnBook, Society, Student,
    },
    store::{EntityStore, StoreConfig},
};

/// Container for all entity stores
#[derive(Clone, Debug)]
pub struct Stores {
    // Library
    pub books: Arc<EntityStore<Book>>,
    pub book_reports: Arc<EntityStore<BookReport>>,
    pub students: Arc<EntityStore<Student>>,
    pub branches: Arc<EntityStore<Branch>>,
    pub publications: Arc<EntityStore<Publication>>,
    pub penalties: Arc<EntityStore<Penalty>>,
    pub issued_books: Arc<EntityStore<IssueBook>>,
    pub returned_books: Arc<EntityStore<ReturnBook>>,
    // Housing
    pub houses: Arc<EntityStore<House>>,
    pub owners: Arc<EntityStore<Owner>>,
    pub societies: Arc<EntityStore<Society>>,
    pub members: Arc<EntityStore<Member>>,
}

/// Builds stores that share one connection pool, auth state and gateway
struct StoreFactory<'a> {
    api: &'a ApiConfig,
    client: reqwest::Client,
    auth: AuthState,
    gateway: Arc<dyn Gateway>,
}

impl StoreFactory<'_> {
    fn build<E: Entity>(&self) -> Arc<EntityStore<E>> {
        let base_url = self.api.base_url_for(E::RESOURCE);
        tracing::debug!("Store {} -> {}/{}", E::RESOURCE, base_url, E::RESOURCE);
        let transport = ApiClient::with_client(self.client.clone(), base_url, self.auth.clone());
        Arc::new(EntityStore::new(
            StoreConfig::for_entity(),
            Arc::new(transport),
            Arc::clone(&self.gateway),
        ))
    }
}

impl Stores {
    /// Create all stores against the configured API
    pub fn new(api: &ApiConfig, auth: AuthState, gateway: Arc<dyn Gateway>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        let factory = StoreFactory { api, client, auth, gateway };

        Ok(Self {
            books: factory.build(),
            book_reports: factory.build(),
            students: factory.build(),
            branches: factory.build(),
            publications: factory.build(),
            penalties: factory.build(),
            issued_books: factory.build(),
            returned_books: factory.build(),
            houses: factory.build(),
            owners: factory.build(),
            societies: factory.build(),
            members: factory.build(),
        })
    }

    /// Load every list, as done when the dashboard mounts
    pub async fn fetch_all(&self) {
        tokio::join!(
            self.books.fetch_list(),
            self.book_reports.fetch_list(),
            self.students.fetch_list(),
            self.branches.fetch_list(),
            self.publications.fetch_list(),
            self.penalties.fetch_list(),
            self.issued_books.fetch_list(),
            self.returned_books.fetch_list(),
            self.houses.fetch_list(),
            self.owners.fetch_list(),
            self.societies.fetch_list(),
            self.members.fetch_list(),
        );
    }
}
