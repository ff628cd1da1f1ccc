mod common;

use reqwest::StatusCode;
use serde_json::json;

use portal::fallback::ids;

const RESOURCES: [&str; 6] = ["clients", "projects", "teams", "transactions", "profiles", "ledger"];

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_offline_app(None, true).await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
    assert_eq!(resp_header(&app, "/health", "x-content-type-options").await, "nosniff");
}

async fn resp_header(app: &common::TestApp, path: &str, name: &str) -> String {
    let resp = app.client.get(app.url(path)).send().await.unwrap();
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// ── Fallback: reads ─────────────────────────────────────────────

#[tokio::test]
async fn lists_serve_fallback_when_database_unconfigured() {
    let app = common::spawn_offline_app(None, true).await;

    for resource in RESOURCES {
        let (body, status) = app.get(&format!("/api/{resource}")).await;
        assert_eq!(status, StatusCode::OK, "{resource}: {body}");
        assert_eq!(body["success"], true);
        assert_eq!(body["source"], "mock");
        assert!(!body["data"].as_array().unwrap().is_empty(), "{resource} fallback empty");
    }
}

#[tokio::test]
async fn lists_serve_fallback_when_database_unreachable() {
    let app = common::spawn_offline_app(Some(common::UNREACHABLE_DATABASE_URL), true).await;

    let (body, status) = app.get("/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // A failed connection is not cached; the next request degrades the same way.
    let (body, status) = app.get("/api/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");
}

#[tokio::test]
async fn get_by_id_serves_matching_fallback_record() {
    let app = common::spawn_offline_app(None, true).await;

    let (body, status) = app.get(&format!("/api/projects/{}", ids::STOREFRONT)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");
    assert_eq!(body["data"]["id"], ids::STOREFRONT.to_string());
    assert_eq!(body["data"]["status"], "completed");

    let (body, status) = app.get(&format!("/api/teams/{}", ids::PLATFORM_SQUAD)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["members"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_by_id_missing_from_fallback_is_404() {
    let app = common::spawn_offline_app(None, true).await;

    let (body, status) = app.get(&format!("/api/clients/{}", uuid::Uuid::now_v7())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Client not found");
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = common::spawn_offline_app(None, true).await;

    for resource in RESOURCES {
        let (body, status) = app.get(&format!("/api/{resource}/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{resource}");
        assert_eq!(body["success"], false);
    }

    let (_, status) = app.delete("/api/clients/12345").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn disabled_fallback_surfaces_unavailability() {
    let app = common::spawn_offline_app(None, false).await;

    let (body, status) = app.get("/api/clients").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);

    let (_, status) = app
        .post("/api/clients", &json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// ── Fallback: writes ────────────────────────────────────────────

#[tokio::test]
async fn create_synthesizes_record_when_database_unavailable() {
    let app = common::spawn_offline_app(None, true).await;

    let (body, status) = app
        .post(
            "/api/clients",
            &json!({ "name": "Ada Lovelace", "email": "ada@example.com", "industry": "Computing" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["source"], "mock");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["projects"], json!([]));
}

#[tokio::test]
async fn misconfigured_database_url_is_not_masked_on_create() {
    let app = common::spawn_offline_app(Some("not a database url"), true).await;

    let (body, status) = app
        .post("/api/clients", &json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Server error");
}

#[tokio::test]
async fn update_and_delete_never_synthesize() {
    let app = common::spawn_offline_app(None, true).await;
    let path = format!("/api/projects/{}", ids::STOREFRONT);

    let (_, status) = app.put(&path, &json!({ "title": "Renamed" })).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (_, status) = app.delete(&path).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let app = common::spawn_offline_app(None, true).await;

    let (body, status) = app
        .post("/api/clients", &json!({ "name": "Ada", "email": "not-an-email" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));

    let (_, status) = app
        .post("/api/transactions", &json!({ "amount": -5.0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, status) = app
        .post("/api/transactions", &json!({ "amount": 100.0, "status": "settled" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, status) = app
        .post("/api/projects", &json!({ "title": "Audit", "progress": 140 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_uses_error_envelope() {
    let app = common::spawn_offline_app(None, true).await;

    let resp = app
        .client
        .post(app.url("/api/teams"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

// ── Completion & dashboard ──────────────────────────────────────

#[tokio::test]
async fn completion_scores_fallback_client() {
    let app = common::spawn_offline_app(None, true).await;

    let (body, status) = app.get(&format!("/api/clients/{}/completion", ids::NORTHWIND)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");
    assert_eq!(body["data"]["score"], 75);

    let (body, _) = app.get(&format!("/api/clients/{}/completion", ids::HELIOS)).await;
    assert_eq!(body["data"]["score"], 28);
}

#[tokio::test]
async fn dashboard_assembles_fallback_client() {
    let app = common::spawn_offline_app(None, true).await;

    let (body, status) = app.get(&format!("/api/dashboard/{}", ids::NORTHWIND)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");

    let data = &body["data"];
    assert_eq!(data["client"]["name"], "Maya Chen");
    assert_eq!(data["completion"], 75);
    assert_eq!(data["projects"].as_array().unwrap().len(), 2);
    assert_eq!(data["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(data["teams"][0]["name"], "Platform Squad");
    assert_eq!(data["escrow"]["released"], 24000.0);
    assert!(!data["notifications"].as_array().unwrap().is_empty());

    let (_, status) = app.get(&format!("/api/dashboard/{}", uuid::Uuid::nil())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Static content ──────────────────────────────────────────────

#[tokio::test]
async fn static_content_is_always_mock() {
    let app = common::spawn_offline_app(None, false).await;

    for path in ["/api/services", "/api/portfolio", "/api/talent", "/api/notifications"] {
        let (body, status) = app.get(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body["source"], "mock");
        assert!(!body["data"].as_array().unwrap().is_empty());
    }
}

// ── Pages ───────────────────────────────────────────────────────

#[tokio::test]
async fn public_pages_render() {
    let app = common::spawn_offline_app(None, true).await;

    let (html, status) = app.get_html("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Product Engineering"));

    let (html, status) = app.get_html("/talent").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Priya Raman"));
    assert!(!html.contains("priya@consultancy.example"));

    let (html, _) = app.get_html("/portfolio").await;
    assert!(html.contains("Northwind Retail"));

    let (html, _) = app.get_html("/services").await;
    assert!(html.contains("Escrow-backed milestones"));
}

#[tokio::test]
async fn dashboard_page_flags_sample_data() {
    let app = common::spawn_offline_app(None, true).await;

    let (html, status) = app.get_html(&format!("/dashboard/{}", ids::NORTHWIND)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Welcome back, Maya Chen"));
    assert!(html.contains("Profile 75% complete"));
    assert!(html.contains("sample data"));
    assert!(html.contains("USD 24000.00"));
}

// ── Database-backed CRUD ────────────────────────────────────────

#[tokio::test]
#[ignore = "requires a Postgres server at DATABASE_URL"]
async fn clients_crud() {
    let app = common::spawn_app().await;

    let client = app
        .create(
            "/api/clients",
            &json!({ "name": "Maya Chen", "email": "maya@northwind.example", "location": "Seattle" }),
        )
        .await;
    let id = client["id"].as_str().unwrap();

    // List
    let (list, status) = app.get("/api/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["source"], "db");
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    // Get
    let (got, status) = app.get(&format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(got["data"]["name"], "Maya Chen");

    // Replace
    let (updated, status) = app
        .put(
            &format!("/api/clients/{id}"),
            &json!({ "name": "Maya Chen", "email": "maya@northwind.example", "company_name": "Northwind" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["company_name"], "Northwind");
    // Full replace: fields not sent are cleared.
    assert_eq!(updated["data"]["location"], serde_json::Value::Null);

    // Delete
    let (deleted, status) = app.delete(&format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Client deleted");

    // Verify deleted
    let (_, status) = app.get(&format!("/api/clients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

#[tokio::test]
#[ignore = "requires a Postgres server at DATABASE_URL"]
async fn missing_ids_are_404_for_every_verb() {
    let app = common::spawn_app().await;
    let path = format!("/api/projects/{}", uuid::Uuid::now_v7());

    let (_, status) = app.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, status) = app.put(&path, &json!({ "title": "Ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, status) = app.delete(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

#[tokio::test]
#[ignore = "requires a Postgres server at DATABASE_URL"]
async fn duplicate_email_conflicts() {
    let app = common::spawn_app().await;

    let body = json!({ "name": "Lena Novak", "email": "lena@consultancy.example" });
    app.create("/api/profiles", &body).await;

    let (resp, status) = app.post("/api/profiles", &body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["success"], false);

    common::cleanup(app).await;
}

#[tokio::test]
#[ignore = "requires a Postgres server at DATABASE_URL"]
async fn teams_store_embedded_members() {
    let app = common::spawn_app().await;

    let team = app
        .create(
            "/api/teams",
            &json!({
                "name": "Platform Squad",
                "members": [
                    { "name": "Priya Raman", "role": "Tech Lead", "email": "priya@consultancy.example" },
                    { "name": "Marco Silva", "role": "Data Engineer" }
                ]
            }),
        )
        .await;
    let id = team["id"].as_str().unwrap();

    let (got, _) = app.get(&format!("/api/teams/{id}")).await;
    assert_eq!(got["data"]["members"][1]["role"], "Data Engineer");
    assert_eq!(got["data"]["members"][1]["email"], serde_json::Value::Null);

    common::cleanup(app).await;
}

#[tokio::test]
#[ignore = "requires a Postgres server at DATABASE_URL"]
async fn ledger_and_escrow_enums_round_trip_through_postgres() {
    let app = common::spawn_app().await;

    let tx = app
        .create(
            "/api/transactions",
            &json!({ "amount": 2500.0, "status": "disputed", "milestone": "Beta" }),
        )
        .await;
    assert_eq!(tx["status"], "disputed");
    assert_eq!(tx["currency"], "USD");

    let entry = app
        .create(
            "/api/ledger",
            &json!({ "transaction_id": tx["id"], "kind": "debit", "amount": 2500.0 }),
        )
        .await;
    assert_eq!(entry["kind"], "debit");
    assert!(entry["recorded_at"].is_string());

    common::cleanup(app).await;
}

#[tokio::test]
#[ignore = "requires a Postgres server at DATABASE_URL"]
async fn completion_and_dashboard_use_live_records() {
    let app = common::spawn_app().await;

    let done = app
        .create("/api/projects", &json!({ "title": "Launch", "status": "completed", "progress": 100 }))
        .await;
    let handover = app
        .create("/api/projects", &json!({ "title": "Handover", "status": "completed" }))
        .await;
    let released = app
        .create("/api/transactions", &json!({ "amount": 1000.0, "status": "released" }))
        .await;
    app.create(
        "/api/teams",
        &json!({ "name": "Delivery", "projects": [done["id"]] }),
    )
    .await;

    let client = app
        .create(
            "/api/clients",
            &json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "company_name": "Analytical Engines",
                "industry": "Computing",
                "location": "London",
                "projects": [done["id"], handover["id"]],
                "escrow_transactions": [released["id"]]
            }),
        )
        .await;
    let id = client["id"].as_str().unwrap();

    // Scalars, projects and escrow complete; no consultants or invitations.
    let (body, status) = app.get(&format!("/api/clients/{id}/completion")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "db");
    assert_eq!(body["data"]["score"], 85);

    let (body, status) = app.get(&format!("/api/dashboard/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["projects"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["teams"][0]["name"], "Delivery");
    assert_eq!(body["data"]["escrow"]["released"], 1000.0);

    common::cleanup(app).await;
}
