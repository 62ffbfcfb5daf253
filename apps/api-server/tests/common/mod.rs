//! Shared test harness for the posts API integration suite.
//!
//! Each test gets its own store and its own server on an ephemeral port, so
//! the suite never shares datastore state between tests. The harness keeps a
//! direct store handle for seeding and for cross-check reads that bypass HTTP.

use std::future::Future;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use futures::FutureExt;
use rand::seq::SliceRandom;

use quill_api::{AppState, handlers};
use quill_core::domain::{Author, Post, PostDraft};
use quill_core::ports::PostStore;
use quill_infra::{MemoryPostStore, StoreConfig};

/// Number of posts seeded before each test body runs.
pub const SEED_COUNT: usize = 10;

/// A running server plus a direct handle on its store.
#[derive(Clone)]
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    store: Arc<MemoryPostStore>,
    server: ServerHandle,
}

impl TestApp {
    /// Open a fresh test-only store, bind the app to 127.0.0.1:0 and spawn it.
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryPostStore::open(&StoreConfig::new("memory://quill-test")));
        let state = AppState::new(store.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test server");

        let addr: SocketAddr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base_url: format!("http://{addr}"),
            store,
            client: reqwest::Client::new(),
            server: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Seed the store directly, bypassing HTTP.
    pub async fn seed(&self) -> Vec<Post> {
        self.store
            .insert_many((0..SEED_COUNT).map(|_| random_draft()).collect())
            .await
            .expect("seed posts")
    }

    /// Cross-check read against the store, bypassing HTTP.
    pub async fn stored(&self, id: uuid::Uuid) -> Option<Post> {
        self.store.find_by_id(id).await.expect("read store")
    }

    /// Live record count, straight from the store.
    pub async fn count(&self) -> u64 {
        self.store.count().await.expect("read store")
    }

    /// An arbitrary seeded post, for tests that need some valid id.
    pub async fn any_stored(&self) -> Post {
        self.store
            .find_one()
            .await
            .expect("read store")
            .expect("store is seeded")
    }

    pub async fn teardown(&self) {
        self.store.drop_all().await.expect("drop post collection");
    }

    pub async fn stop(self) {
        self.server.stop(true).await;
    }
}

/// Run one test against a freshly spawned, seeded app.
///
/// Lifecycle, in order: spawn server, seed 10 posts, run the body, drop all
/// data, stop the server. Teardown runs on every exit path; a panicking
/// assertion is resumed only after cleanup finished, so it fails its own
/// test and nothing else.
pub async fn run_seeded<F, Fut>(body: F)
where
    F: FnOnce(TestApp) -> Fut,
    Fut: Future<Output = ()>,
{
    let app = TestApp::spawn().await;
    app.seed().await;

    let outcome = AssertUnwindSafe(body(app.clone())).catch_unwind().await;

    app.teardown().await;
    app.stop().await;

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

const WORDS: &[&str] = &[
    "autumn", "brass", "cinder", "drift", "ember", "fjord", "gale", "harbor", "inlet", "juniper",
    "kiln", "larch", "meadow", "north", "orchard", "pine", "quarry", "ridge", "slate", "thicket",
];

const FIRST_NAMES: &[&str] = &["Ada", "Brendan", "Grace", "Graydon", "Ken", "Margaret"];
const LAST_NAMES: &[&str] = &["Hopper", "Lovelace", "Ritchie", "Hamilton", "Thompson", "Eich"];

fn words(rng: &mut impl rand::Rng, n: usize) -> String {
    (0..n)
        .map(|_| *WORDS.choose(rng).expect("word list is non-empty"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Typed stand-in for a faker library: a random but well-formed candidate post.
pub fn random_draft() -> PostDraft {
    let mut rng = rand::thread_rng();
    let author = Author::new(
        *FIRST_NAMES.choose(&mut rng).expect("name list is non-empty"),
        *LAST_NAMES.choose(&mut rng).expect("name list is non-empty"),
    );

    PostDraft::new(words(&mut rng, 3), words(&mut rng, 12), author)
}
