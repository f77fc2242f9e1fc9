//! Shared harness for HTTP integration tests.
//!
//! Starts the full router on an ephemeral port with an in-memory store and a
//! temporary public directory.

#![allow(dead_code)]

use arcade_api::{store::Store, uploads::ImageStore, AppState, Config};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
    pub images_dir: PathBuf,
    _public: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

pub async fn start_server() -> TestApp {
    start_with_store(Store::in_memory()).await
}

pub async fn start_with_store(store: Store) -> TestApp {
    let public = tempfile::tempdir().unwrap();
    let config = Config {
        public_dir: public.path().to_path_buf(),
        images_dir: public.path().join("images"),
        ..Config::default()
    };

    let state = AppState::new(store, ImageStore::new(&config.images_dir));
    let app = arcade_api::app(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        images_dir: config.images_dir,
        _public: public,
    }
}
