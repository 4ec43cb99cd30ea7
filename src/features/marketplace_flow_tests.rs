//! End-to-end flows against a real Postgres.
//!
//! Run with `DATABASE_URL` set: `cargo test -- --ignored`.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::test_helpers::{mint_token, test_server_with_pool};

struct Caller {
    id: Uuid,
    token: String,
}

impl Caller {
    fn new(email: &str) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            token: mint_token(id, email),
        }
    }
}

async fn onboard(server: &TestServer, caller: &Caller, body: Value) -> StatusCode {
    server
        .post("/api/auth/onboarding")
        .authorization_bearer(&caller.token)
        .json(&body)
        .await
        .status_code()
}

async fn brand(server: &TestServer, email: &str) -> Caller {
    let caller = Caller::new(email);
    let status = onboard(server, &caller, json!({ "role": "brand", "name": "Acme" })).await;
    assert_eq!(status, StatusCode::CREATED);
    caller
}

async fn creator(server: &TestServer, email: &str) -> Caller {
    let caller = Caller::new(email);
    let status = onboard(
        server,
        &caller,
        json!({ "role": "creator", "name": "Dana", "niche_tags": ["tech"] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    caller
}

async fn create_campaign(server: &TestServer, owner: &Caller, status: &str) -> String {
    let response = server
        .post("/api/campaigns")
        .authorization_bearer(&owner.token)
        .json(&json!({
            "title": "Spring drop",
            "description": "Short-form unboxing video",
            "budget": "1250.50",
            "deadline": "2030-06-01",
            "content_type": "video",
            "num_creators": 3,
            "niche_tags": ["tech", "gadgets"],
            "status": status
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn apply(server: &TestServer, caller: &Caller, campaign_id: &str) -> (StatusCode, Value) {
    let response = server
        .post(&format!("/api/campaigns/{}/apply", campaign_id))
        .authorization_bearer(&caller.token)
        .json(&json!({ "pitch": "I review gadgets weekly" }))
        .await;
    (response.status_code(), response.json())
}

async fn submit(server: &TestServer, caller: &Caller, application_id: &str) -> StatusCode {
    server
        .post("/api/submissions")
        .authorization_bearer(&caller.token)
        .json(&json!({
            "application_id": application_id,
            "file_url": "https://cdn.example.com/uploads/clip.mp4",
            "description": "Final cut"
        }))
        .await
        .status_code()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_onboarding_happens_once(pool: PgPool) {
    let server = test_server_with_pool(pool.clone());
    let caller = brand(&server, "brand@example.com").await;

    let again = onboard(&server, &caller, json!({ "role": "creator", "name": "Other" })).await;
    assert_eq!(again, StatusCode::BAD_REQUEST);

    let profiles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE user_id = $1")
        .bind(caller.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    let creators: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creators WHERE user_id = $1")
        .bind(caller.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!((profiles, creators), (1, 0));

    let me: Value = server
        .get("/api/auth/me")
        .authorization_bearer(&caller.token)
        .await
        .json();
    assert_eq!(me["data"]["hasProfile"], true);
    assert_eq!(me["data"]["role"], "brand");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_onboarding_yields_one_profile(pool: PgPool) {
    let server = test_server_with_pool(pool.clone());
    let caller = Caller::new("race@example.com");
    let body = json!({ "role": "creator", "name": "Racer" });

    let (a, b, c) = tokio::join!(
        onboard(&server, &caller, body.clone()),
        onboard(&server, &caller, body.clone()),
        onboard(&server, &caller, body.clone()),
    );
    let statuses = [a, b, c];
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CREATED).count(),
        1
    );
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::CREATED || *s == StatusCode::BAD_REQUEST));

    let creators: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creators WHERE user_id = $1")
        .bind(caller.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(creators, 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_campaign_round_trip_and_public_listing(pool: PgPool) {
    let server = test_server_with_pool(pool);
    let owner = brand(&server, "brand@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "active").await;

    let body: Value = server
        .get(&format!("/api/campaigns/{}", campaign_id))
        .await
        .json();
    let data = &body["data"];
    assert_eq!(data["budget"], "1250.50");
    assert_eq!(data["status"], "active");
    assert_eq!(data["num_creators"], 3);
    assert_eq!(data["deadline"], "2030-06-01T00:00:00Z");
    let mut tags: Vec<String> = serde_json::from_value(data["niche_tags"].clone()).unwrap();
    tags.sort();
    assert_eq!(tags, vec!["gadgets".to_string(), "tech".to_string()]);
    assert_eq!(data["brand"]["name"], "Acme");
    assert_eq!(data["application_count"], 0);

    let listing: Value = server
        .get("/api/campaigns")
        .add_query_param("status", "active")
        .await
        .json();
    assert_eq!(listing["meta"]["total"], 1);
    assert_eq!(listing["data"][0]["id"], campaign_id.as_str());

    server
        .get(&format!("/api/campaigns/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_campaign_status_changes_follow_the_table(pool: PgPool) {
    let server = test_server_with_pool(pool);
    let owner = brand(&server, "brand@example.com").await;
    let other = brand(&server, "other@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "draft").await;
    let path = format!("/api/campaigns/{}", campaign_id);

    server
        .patch(&path)
        .authorization_bearer(&other.token)
        .json(&json!({ "status": "active" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    server
        .patch(&path)
        .authorization_bearer(&owner.token)
        .json(&json!({ "status": "completed" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .patch(&path)
        .authorization_bearer(&owner.token)
        .json(&json!({ "status": "active", "title": "Spring drop v2" }))
        .await
        .assert_status_ok();

    let body: Value = server
        .patch(&path)
        .authorization_bearer(&owner.token)
        .json(&json!({ "status": "completed" }))
        .await
        .json();
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["title"], "Spring drop v2");

    server
        .patch(&path)
        .authorization_bearer(&owner.token)
        .json(&json!({ "status": "active" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_apply_accept_submit_review(pool: PgPool) {
    let server = test_server_with_pool(pool);
    let owner = brand(&server, "brand@example.com").await;
    let x = creator(&server, "x@example.com").await;
    let y = creator(&server, "y@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "active").await;

    // Brands cannot apply
    let (status, _) = apply(&server, &owner, &campaign_id).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = apply(&server, &x, &campaign_id).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "applied");
    let application_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = apply(&server, &x, &campaign_id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Already applied to this campaign");

    // Submitting before acceptance
    assert_eq!(submit(&server, &x, &application_id).await, StatusCode::BAD_REQUEST);

    // Another creator cannot accept
    server
        .post(&format!("/api/applications/{}/accept", application_id))
        .authorization_bearer(&y.token)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let body: Value = server
        .post(&format!("/api/applications/{}/accept", application_id))
        .authorization_bearer(&owner.token)
        .await
        .json();
    assert_eq!(body["data"]["status"], "accepted");

    // Accepted applications cannot be rejected
    server
        .post(&format!("/api/applications/{}/reject", application_id))
        .authorization_bearer(&owner.token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(submit(&server, &y, &application_id).await, StatusCode::FORBIDDEN);
    assert_eq!(submit(&server, &x, &application_id).await, StatusCode::CREATED);

    let listing: Value = server
        .get("/api/submissions")
        .authorization_bearer(&owner.token)
        .await
        .json();
    assert_eq!(listing["meta"]["total"], 1);
    assert_eq!(listing["data"][0]["campaign"]["title"], "Spring drop");
    assert_eq!(listing["data"][0]["creator"]["name"], "Dana");
    let submission_id = listing["data"][0]["id"].as_str().unwrap().to_string();

    let own: Value = server
        .get("/api/submissions")
        .authorization_bearer(&x.token)
        .await
        .json();
    assert_eq!(own["meta"]["total"], 1);
    let none: Value = server
        .get("/api/submissions")
        .authorization_bearer(&y.token)
        .await
        .json();
    assert_eq!(none["meta"]["total"], 0);

    server
        .post(&format!("/api/submissions/{}/approve", submission_id))
        .authorization_bearer(&x.token)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    server
        .post(&format!("/api/submissions/{}/approve", submission_id))
        .authorization_bearer(&owner.token)
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/submissions/{}/reject", submission_id))
        .authorization_bearer(&owner.token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let mine: Value = server
        .get("/api/applications/my")
        .authorization_bearer(&x.token)
        .await
        .json();
    assert_eq!(mine["data"][0]["status"], "accepted");
    assert_eq!(mine["data"][0]["campaign"]["brand_name"], "Acme");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_lifecycle_gates_on_campaign_status(pool: PgPool) {
    let server = test_server_with_pool(pool);
    let owner = brand(&server, "brand@example.com").await;
    let x = creator(&server, "x@example.com").await;

    let draft_id = create_campaign(&server, &owner, "draft").await;
    let (status, body) = apply(&server, &x, &draft_id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Campaign is not active");

    let (status, _) = apply(&server, &x, &Uuid::new_v4().to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Campaign closes between application and review
    let campaign_id = create_campaign(&server, &owner, "active").await;
    let (_, body) = apply(&server, &x, &campaign_id).await;
    let application_id = body["data"]["id"].as_str().unwrap().to_string();

    server
        .patch(&format!("/api/campaigns/{}", campaign_id))
        .authorization_bearer(&owner.token)
        .json(&json!({ "status": "cancelled" }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/api/applications/{}/accept", application_id))
        .authorization_bearer(&owner.token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Rejection does not depend on the campaign's status
    let body: Value = server
        .post(&format!("/api/applications/{}/reject", application_id))
        .authorization_bearer(&owner.token)
        .await
        .json();
    assert_eq!(body["data"]["status"], "rejected");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_campaign_applications_visible_to_owner_only(pool: PgPool) {
    let server = test_server_with_pool(pool);
    let owner = brand(&server, "brand@example.com").await;
    let other = brand(&server, "other@example.com").await;
    let x = creator(&server, "x@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "active").await;
    apply(&server, &x, &campaign_id).await;

    let path = format!("/api/campaigns/{}/applications", campaign_id);
    server
        .get(&path)
        .authorization_bearer(&other.token)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let body: Value = server
        .get(&path)
        .authorization_bearer(&owner.token)
        .await
        .json();
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["creator"]["name"], "Dana");

    let mine: Value = server
        .get("/api/campaigns/my")
        .authorization_bearer(&owner.token)
        .await
        .json();
    assert_eq!(mine["data"][0]["application_count"], 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_waitlist_and_admin_surface(pool: PgPool) {
    let server = test_server_with_pool(pool.clone());

    let response = server
        .post("/api/waitlist")
        .json(&json!({
            "email": "dana@example.com",
            "name": "Dana",
            "form_type": "creator",
            "extra": { "followers": 12000, "platforms": ["tiktok"] }
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["extra"]["platforms"][0], "tiktok");

    let owner = brand(&server, "admin-looking@example.com").await;
    create_campaign(&server, &owner, "active").await;
    create_campaign(&server, &owner, "draft").await;

    // An email that looks like an admin's grants nothing
    server
        .get("/api/admin/stats")
        .authorization_bearer(&owner.token)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let admin = Caller::new("ops@example.com");
    sqlx::query("INSERT INTO profiles (user_id, role, email) VALUES ($1, 'admin', $2)")
        .bind(admin.id)
        .bind("ops@example.com")
        .execute(&pool)
        .await
        .unwrap();

    let stats: Value = server
        .get("/api/admin/stats")
        .authorization_bearer(&admin.token)
        .await
        .json();
    assert_eq!(stats["data"]["users"], 2);
    assert_eq!(stats["data"]["campaigns"], 1);
    assert_eq!(stats["data"]["applications"], 0);

    let users: Value = server
        .get("/api/admin/users")
        .authorization_bearer(&admin.token)
        .await
        .json();
    assert_eq!(users["meta"]["total"], 2);
    assert_eq!(users["meta"]["limit"], 50);

    let campaigns: Value = server
        .get("/api/admin/campaigns")
        .authorization_bearer(&admin.token)
        .await
        .json();
    assert_eq!(campaigns["meta"]["total"], 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_applies_yield_one_application(pool: PgPool) {
    let server = test_server_with_pool(pool.clone());
    let owner = brand(&server, "brand@example.com").await;
    let x = creator(&server, "x@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "active").await;

    let (a, b, c) = tokio::join!(
        apply(&server, &x, &campaign_id),
        apply(&server, &x, &campaign_id),
        apply(&server, &x, &campaign_id),
    );
    let results = [a, b, c];
    assert_eq!(
        results.iter().filter(|(s, _)| *s == StatusCode::CREATED).count(),
        1
    );
    for (status, body) in results.iter().filter(|(s, _)| *s != StatusCode::CREATED) {
        assert_eq!(*status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Already applied to this campaign");
    }

    let applications: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE creator_id = $1")
            .bind(
                sqlx::query_scalar::<_, Uuid>("SELECT id FROM creators WHERE user_id = $1")
                    .bind(x.id)
                    .fetch_one(&pool)
                    .await
                    .unwrap(),
            )
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(applications, 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_accept_requires_applied_status(pool: PgPool) {
    let server = test_server_with_pool(pool);
    let owner = brand(&server, "brand@example.com").await;
    let x = creator(&server, "x@example.com").await;
    let y = creator(&server, "y@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "active").await;

    let (_, body) = apply(&server, &x, &campaign_id).await;
    let rejected_id = body["data"]["id"].as_str().unwrap().to_string();
    server
        .post(&format!("/api/applications/{}/reject", rejected_id))
        .authorization_bearer(&owner.token)
        .await
        .assert_status_ok();
    let response = server
        .post(&format!("/api/applications/{}/accept", rejected_id))
        .authorization_bearer(&owner.token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Application is already rejected");

    let (_, body) = apply(&server, &y, &campaign_id).await;
    let accepted_id = body["data"]["id"].as_str().unwrap().to_string();
    let path = format!("/api/applications/{}/accept", accepted_id);
    server
        .post(&path)
        .authorization_bearer(&owner.token)
        .await
        .assert_status_ok();
    server
        .post(&path)
        .authorization_bearer(&owner.token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_apply_waits_for_campaign_closing_in_flight(pool: PgPool) {
    let server = test_server_with_pool(pool.clone());
    let owner = brand(&server, "brand@example.com").await;
    let x = creator(&server, "x@example.com").await;
    let campaign_id = create_campaign(&server, &owner, "active").await;

    // Cancel the campaign in a transaction that stays open while the apply runs
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("UPDATE campaigns SET status = 'cancelled', updated_at = NOW() WHERE id = $1")
        .bind(Uuid::parse_str(&campaign_id).unwrap())
        .execute(&mut *tx)
        .await
        .unwrap();

    let close = async {
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        tx.commit().await.unwrap();
    };
    let ((status, body), ()) = tokio::join!(apply(&server, &x, &campaign_id), close);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Campaign is not active");

    let applications: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE campaign_id = $1")
            .bind(Uuid::parse_str(&campaign_id).unwrap())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(applications, 0);
}
