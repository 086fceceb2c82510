//! Black-box tests against a real server on an ephemeral port.

use std::sync::Arc;

use lowespro_api::build_router;
use lowespro_storage::Store;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestApp {
    base: String,
    client: reqwest::Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let store = Arc::new(Store::open_in_memory().unwrap());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(store)).await.unwrap();
        });
        Self {
            base: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client.post(self.url(path)).json(&body).send().await.unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn create_vendor(&self, name: &str) -> Value {
        let resp = self.post("/api/vendors", json!({ "companyName": name })).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    }
}

#[tokio::test]
async fn test_vendor_numbers_assigned_in_order() {
    let app = TestApp::spawn().await;

    let first = app.create_vendor("Acme Supply").await;
    let second = app.create_vendor("Borealis Tools").await;
    assert_eq!(first["vendorNumber"], "V#00001");
    assert_eq!(second["vendorNumber"], "V#00002");
}

#[tokio::test]
async fn test_vendor_create_requires_company_name() {
    let app = TestApp::spawn().await;

    let resp = app.post("/api/vendors", json!({ "phone": "555-0100" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "companyName is required");
}

#[tokio::test]
async fn test_vendor_search_by_name() {
    let app = TestApp::spawn().await;
    app.create_vendor("Acme Supply").await;
    app.create_vendor("Borealis Tools").await;

    let resp = app.get("/api/vendors?search=acme").await;
    let hits: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["companyName"], "Acme Supply");
}

#[tokio::test]
async fn test_vendor_lookup_by_query_id() {
    let app = TestApp::spawn().await;
    let vendor = app.create_vendor("Acme Supply").await;
    let id = vendor["id"].as_str().unwrap();

    let resp = app.get(&format!("/api/vendors?id={id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["companyName"], "Acme Supply");
}

#[tokio::test]
async fn test_vendor_patch_merges() {
    let app = TestApp::spawn().await;
    let vendor = app.create_vendor("Acme Supply").await;
    let id = vendor["id"].as_str().unwrap();

    let resp = app
        .client
        .patch(app.url(&format!("/api/vendors/{id}")))
        .json(&json!({ "notes": "preferred supplier" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = resp.json().await.unwrap();
    assert_eq!(patched["companyName"], "Acme Supply");
    assert_eq!(patched["notes"], "preferred supplier");
}

#[tokio::test]
async fn test_vendor_put_replaces() {
    let app = TestApp::spawn().await;
    let resp = app
        .post(
            "/api/vendors",
            json!({ "companyName": "Acme Supply", "notes": "old notes" }),
        )
        .await;
    let vendor: Value = resp.json().await.unwrap();
    let id = vendor["id"].as_str().unwrap();

    let resp = app
        .client
        .put(app.url(&format!("/api/vendors/{id}")))
        .json(&json!({ "companyName": "Acme Supply Co" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced: Value = resp.json().await.unwrap();
    assert_eq!(replaced["companyName"], "Acme Supply Co");
    assert_eq!(replaced["notes"], Value::Null);
    assert_eq!(replaced["vendorNumber"], vendor["vendorNumber"]);
    assert_eq!(replaced["createdAt"], vendor["createdAt"]);
}

#[tokio::test]
async fn test_vendor_contacts_roundtrip() {
    let app = TestApp::spawn().await;
    let contacts = json!([
        { "label": "Office", "number": "555-0100", "extension": "12" },
        { "label": "Mobile", "number": "555-0101" }
    ]);
    let resp = app
        .post(
            "/api/vendors",
            json!({ "companyName": "Acme Supply", "phoneContacts": contacts }),
        )
        .await;
    let vendor: Value = resp.json().await.unwrap();
    let id = vendor["id"].as_str().unwrap();

    let fetched: Value = app
        .get(&format!("/api/vendors/{id}"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["phoneContacts"], contacts);
}

#[tokio::test]
async fn test_delete_missing_vendor_is_404() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .delete(app.url("/api/vendors/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Vendor not found");
}

#[tokio::test]
async fn test_representative_snapshots_vendor_name() {
    let app = TestApp::spawn().await;
    let vendor = app.create_vendor("Acme Supply").await;

    let resp = app
        .post(
            "/api/representatives",
            json!({ "name": "Jordan Fields", "vendorId": vendor["id"] }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let rep: Value = resp.json().await.unwrap();
    assert_eq!(rep["vendorName"], "Acme Supply");
}

#[tokio::test]
async fn test_representative_unknown_vendor_is_400() {
    let app = TestApp::spawn().await;

    let resp = app
        .post(
            "/api/representatives",
            json!({ "name": "Jordan Fields", "vendorId": "missing" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_with_children_cannot_be_deleted() {
    let app = TestApp::spawn().await;

    let parent: Value = app
        .post("/api/categories", json!({ "name": "Lumber" }))
        .await
        .json()
        .await
        .unwrap();
    let parent_id = parent["id"].as_str().unwrap();
    app.post(
        "/api/categories",
        json!({ "name": "Plywood", "parentId": parent_id, "level": "2" }),
    )
    .await;

    let resp = app
        .client
        .delete(app.url(&format!("/api/categories/{parent_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The parent must survive the refused delete.
    let still_there = app.get(&format!("/api/categories/{parent_id}")).await;
    assert_eq!(still_there.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_category_cannot_be_parented_to_itself() {
    let app = TestApp::spawn().await;

    let category: Value = app
        .post("/api/categories", json!({ "name": "Lumber" }))
        .await
        .json()
        .await
        .unwrap();
    let id = category["id"].as_str().unwrap();

    let resp = app
        .client
        .patch(app.url(&format!("/api/categories/{id}")))
        .json(&json!({ "parentId": id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The refused patch must not have made the row undeletable.
    let resp = app
        .client
        .delete(app.url(&format!("/api/categories/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_category_vendor_count_in_listing() {
    let app = TestApp::spawn().await;
    let category: Value = app
        .post("/api/categories", json!({ "name": "Lumber" }))
        .await
        .json()
        .await
        .unwrap();
    app.post(
        "/api/vendors",
        json!({ "companyName": "Acme Supply", "categories": ["Lumber"] }),
    )
    .await;

    let id = category["id"].as_str().unwrap();
    let fetched: Value = app
        .get(&format!("/api/categories/{id}"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["vendorCount"], 1);
}

#[tokio::test]
async fn test_duplicate_trade_is_409() {
    let app = TestApp::spawn().await;

    let first = app.post("/api/trades", json!({ "name": "Welder" })).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.post("/api/trades", json!({ "name": "Welder" })).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_default_trades_listed() {
    let app = TestApp::spawn().await;

    let trades: Vec<Value> = app.get("/api/trades").await.json().await.unwrap();
    assert_eq!(trades.len(), 10);
    assert!(trades.iter().all(|t| t["isDefault"] == true));
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/vendors"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let app = TestApp::spawn().await;

    // Trades have no PATCH route.
    let resp = app
        .client
        .patch(app.url("/api/trades/some-id"))
        .json(&json!({ "name": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = TestApp::spawn().await;
    app.create_vendor("Acme Supply").await;

    let resp = app.get("/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["vendors"], 1);
}

#[tokio::test]
async fn test_debug_reports_schema_and_counts() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/debug").await.json().await.unwrap();
    assert_eq!(body["schemaVersion"], 1);
    assert_eq!(body["rowCounts"]["trades"], 10);
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .request(reqwest::Method::OPTIONS, app.url("/api/vendors"))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
