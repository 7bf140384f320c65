//! Shared fixture: an in-process catalog server plus a preconfigured
//! `storelens` command pointed at it.

use axum::{Json, Router, extract::Path, http::StatusCode, response::IntoResponse, routing::get};
use std::net::SocketAddr;

pub fn catalog_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "title": "Red Shirt",
            "price": 10.0,
            "description": "A bright cotton shirt",
            "category": "clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 4.0, "count": 120 }
        },
        {
            "id": 2,
            "title": "Blue Hat",
            "price": 20.0,
            "description": "Keeps the sun off",
            "category": "clothing",
            "image": "https://example.com/2.jpg"
        },
        {
            "id": 3,
            "title": "USB Drive",
            "price": 30.0,
            "description": "Stores a shirt photo, among other things",
            "category": "electronics",
            "image": "https://example.com/3.jpg",
            "rating": { "rate": 3.0, "count": 15 }
        },
        {
            "id": 4,
            "title": "Gold Ring",
            "price": 120.0,
            "description": "Shiny",
            "category": "jewelery",
            "image": "https://example.com/4.jpg",
            "rating": { "rate": 5.0, "count": 7 }
        }
    ])
}

fn fixture_app() -> Router {
    Router::new()
        .route("/products", get(|| async { Json(catalog_json()) }))
        .route(
            "/products/:id",
            get(|Path(id): Path<String>| async move {
                let catalog = catalog_json();
                let found = catalog
                    .as_array()
                    .unwrap()
                    .iter()
                    .find(|p| p["id"].to_string() == id)
                    .cloned();
                match found {
                    Some(product) => Json(product).into_response(),
                    // Upstream answers unknown ids with 200 and an empty body.
                    None => String::new().into_response(),
                }
            }),
        )
        .route(
            "/broken/products",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

pub struct FixtureServer {
    pub addr: SocketAddr,
    _runtime: tokio::runtime::Runtime,
}

impl FixtureServer {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("Failed to bind fixture listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        runtime.spawn(async move {
            axum::serve(listener, fixture_app()).await.expect("fixture server failed");
        });
        Self { addr, _runtime: runtime }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL whose `/products` route always answers HTTP 500.
    pub fn broken_base_url(&self) -> String {
        format!("http://{}/broken", self.addr)
    }

    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("storelens").expect("Failed to find binary");
        cmd.arg("--base-url").arg(self.base_url());
        cmd
    }
}
