mod common;

use axum::http::{header, StatusCode};
use serde_json::json;

use common::{TestApp, ADMIN_EMAIL, ADMIN_PASSWORD};

#[tokio::test]
async fn test_root_and_health() {
    let app = TestApp::new().await;

    let root = app.get("/", None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(
        root.body["message"],
        "Welcome to the Bike and Scooter Rental API!"
    );

    let health = app.get("/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "ok");
    assert_eq!(health.body["migrations_applied"], health.body["migrations_total"]);
}

#[tokio::test]
async fn test_register_login_and_me() {
    let app = TestApp::new().await;

    let registered = app.register("tester", "tester@example.com", "secret").await;
    assert_eq!(registered.status, StatusCode::CREATED);
    assert_eq!(registered.body["username"], "tester");
    assert_eq!(registered.body["email"], "tester@example.com");
    assert_eq!(registered.body["is_active"], true);
    assert!(registered.body.get("password_hash").is_none());

    let login = app.login("tester@example.com", "secret").await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["token_type"], "bearer");
    assert_eq!(login.body["expires_in"], 30 * 60);
    let token = login.body["access_token"].as_str().unwrap();

    let me = app.get("/users/me", Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["id"], registered.body["id"]);
    assert_eq!(me.body["is_admin"], false);
}

#[tokio::test]
async fn test_login_accepts_username() {
    let app = TestApp::new().await;
    app.register("tester", "tester@example.com", "secret").await;

    let login = app.login("tester", "secret").await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(login.body["access_token"].is_string());
}

#[tokio::test]
async fn test_token_carries_user_id_and_configured_lifetime() {
    let app = TestApp::new().await;
    let registered = app.register("tester", "tester@example.com", "secret").await;
    let login = app.login("tester@example.com", "secret").await;

    let token = login.body["access_token"].as_str().unwrap();
    let claims = app.state.jwt.validate_access_token(token).unwrap();

    assert_eq!(claims.user_id().unwrap(), registered.body["id"].as_i64().unwrap());
    assert_eq!(claims.exp - claims.iat, 30 * 60);
    assert_eq!(claims.token_type, "access");
}

#[tokio::test]
async fn test_duplicate_email_or_username_is_rejected() {
    let app = TestApp::new().await;
    app.register("tester", "tester@example.com", "secret").await;

    let same_email = app.register("other", "Tester@Example.com", "secret").await;
    assert_eq!(same_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_email.body["detail"], "Email already registered");

    let same_username = app.register("tester", "other@example.com", "secret").await;
    assert_eq!(same_username.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_username.body["detail"], "Username already registered");

    let same_username_other_case = app.register("TESTER", "third@example.com", "secret").await;
    assert_eq!(same_username_other_case.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_username_other_case.body["detail"], "Username already registered");
}

#[tokio::test]
async fn test_invalid_registration_is_rejected() {
    let app = TestApp::new().await;

    let bad_email = app.register("tester", "not-an-email", "secret").await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.body["code"], "VALIDATION_ERROR");

    let short_password = app.register("tester", "tester@example.com", "123").await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);

    let missing_field = app
        .post("/users/register", None, json!({ "username": "tester" }))
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bad_credentials_are_unauthorized() {
    let app = TestApp::new().await;
    app.register("tester", "tester@example.com", "secret").await;

    let wrong_password = app.login("tester@example.com", "wrong-password").await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);

    let unknown = app.login("nobody@example.com", "secret").await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_or_bad_token_is_unauthorized() {
    let app = TestApp::new().await;

    let missing = app.get("/users/me", None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");

    let garbage = app.get("/users/me", Some("not-a-token")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_update_profile_and_change_password() {
    let app = TestApp::new().await;
    let (_, token) = app.rider("tester").await;

    let updated = app
        .patch(
            "/users/me",
            Some(&token),
            json!({ "full_name": "Test Rider", "email": "renamed@example.com" }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["full_name"], "Test Rider");
    assert_eq!(updated.body["email"], "renamed@example.com");
    assert_eq!(updated.body["username"], "tester");

    let recased = app
        .patch("/users/me", Some(&token), json!({ "username": "Tester" }))
        .await;
    assert_eq!(recased.status, StatusCode::OK);
    assert_eq!(recased.body["username"], "Tester");

    let wrong_current = app
        .post(
            "/users/me/password",
            Some(&token),
            json!({ "current_password": "nope", "new_password": "new-secret" }),
        )
        .await;
    assert_eq!(wrong_current.status, StatusCode::BAD_REQUEST);

    let changed = app
        .post(
            "/users/me/password",
            Some(&token),
            json!({ "current_password": "secret", "new_password": "new-secret" }),
        )
        .await;
    assert_eq!(changed.status, StatusCode::NO_CONTENT);

    assert_eq!(
        app.login("renamed@example.com", "secret").await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.login("renamed@example.com", "new-secret").await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_profile_update_cannot_steal_email() {
    let app = TestApp::new().await;
    app.rider("first").await;
    let (_, token) = app.rider("second").await;

    let taken = app
        .patch("/users/me", Some(&token), json!({ "email": "first@example.com" }))
        .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_admin_gets_forbidden_on_admin_endpoints() {
    let app = TestApp::new().await;
    let (other_id, _) = app.rider("other").await;
    let (_, token) = app.rider("tester").await;

    let list = app.get("/users/", Some(&token)).await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);
    assert_eq!(list.body["code"], "FORBIDDEN");

    let delete = app.delete(&format!("/users/{}", other_id), Some(&token)).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_and_deletes_users() {
    let app = TestApp::new().await;
    let (admin_id, admin_token) = app.admin().await;
    let (rider_id, _) = app.rider("tester").await;

    let list = app.get("/users", Some(&admin_token)).await;
    assert_eq!(list.status, StatusCode::OK);
    let users = list.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users
        .iter()
        .any(|u| u["id"] == admin_id && u["is_admin"] == true));

    let deleted = app
        .delete(&format!("/users/{}", rider_id), Some(&admin_token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app
        .delete(&format!("/users/{}", rider_id), Some(&admin_token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_users_token_stops_working() {
    let app = TestApp::new().await;
    let (_, admin_token) = app.admin().await;
    let (rider_id, rider_token) = app.rider("tester").await;

    app.delete(&format!("/users/{}", rider_id), Some(&admin_token))
        .await;

    let me = app.get("/users/me", Some(&rider_token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_account_is_locked() {
    let app = TestApp::new().await;
    let (admin_id, admin_token) = app.admin().await;

    let delete_self = app
        .delete(&format!("/users/{}", admin_id), Some(&admin_token))
        .await;
    assert_eq!(delete_self.status, StatusCode::FORBIDDEN);

    let patch_self = app
        .patch("/users/me", Some(&admin_token), json!({ "full_name": "Boss" }))
        .await;
    assert_eq!(patch_self.status, StatusCode::FORBIDDEN);

    let password = app
        .post(
            "/users/me/password",
            Some(&admin_token),
            json!({ "current_password": ADMIN_PASSWORD, "new_password": "another-one" }),
        )
        .await;
    assert_eq!(password.status, StatusCode::FORBIDDEN);

    let me = app.get("/users/me", Some(&admin_token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], ADMIN_EMAIL);
    assert_eq!(me.body["is_admin"], true);
}
