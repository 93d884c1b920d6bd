mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_rental_crud() {
    let app = TestApp::new().await;
    let (user_id, token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&token).await;

    let created = app
        .post(
            "/rentals/",
            Some(&token),
            json!({
                "user_id": user_id,
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T10:00:00",
                "end_time": "2023-10-01T12:00:00",
                "total_cost": 10.0
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["user_id"], user_id);
    assert_eq!(created.body["vehicle_id"], vehicle_id);
    assert_eq!(created.body["start_time"], "2023-10-01T10:00:00");
    assert_eq!(created.body["total_cost"], 10.0);
    let id = created.body["id"].as_i64().unwrap();

    let fetched = app.get(&format!("/rentals/{}", id), Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["end_time"], "2023-10-01T12:00:00");

    let updated = app
        .put(
            &format!("/rentals/{}", id),
            Some(&token),
            json!({ "total_cost": 12.5 }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["total_cost"], 12.5);

    let deleted = app.delete(&format!("/rentals/{}", id), Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.get(&format!("/rentals/{}", id), Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cost_is_computed_when_missing() {
    let app = TestApp::new().await;
    let (_, token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&token).await;

    let closed = app
        .post(
            "/rentals/",
            Some(&token),
            json!({
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T10:00:00",
                "end_time": "2023-10-01T11:30:00"
            }),
        )
        .await;
    assert_eq!(closed.status, StatusCode::CREATED);
    assert_eq!(closed.body["total_cost"], 7.5);

    let open = app
        .post(
            "/rentals/",
            Some(&token),
            json!({ "vehicle_id": vehicle_id, "start_time": "2023-10-01T13:00:00" }),
        )
        .await;
    assert_eq!(open.status, StatusCode::CREATED);
    assert!(open.body["total_cost"].is_null());
    assert!(open.body["end_time"].is_null());

    let returned = app
        .put(
            &format!("/rentals/{}", open.body["id"]),
            Some(&token),
            json!({ "end_time": "2023-10-01T15:00:00" }),
        )
        .await;
    assert_eq!(returned.status, StatusCode::OK);
    assert_eq!(returned.body["total_cost"], 10.0);
}

#[tokio::test]
async fn test_moving_end_time_reprices_rental() {
    let app = TestApp::new().await;
    let (_, token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&token).await;

    let created = app
        .post(
            "/rentals/",
            Some(&token),
            json!({
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T10:00:00",
                "end_time": "2023-10-01T12:00:00"
            }),
        )
        .await;
    assert_eq!(created.body["total_cost"], 10.0);
    let uri = format!("/rentals/{}", created.body["id"]);

    let extended = app
        .put(&uri, Some(&token), json!({ "end_time": "2023-10-01T14:00:00" }))
        .await;
    assert_eq!(extended.status, StatusCode::OK);
    assert_eq!(extended.body["end_time"], "2023-10-01T14:00:00");
    assert_eq!(extended.body["total_cost"], 20.0);

    // An explicit cost in the same request wins over the hourly rate
    let corrected = app
        .put(
            &uri,
            Some(&token),
            json!({ "end_time": "2023-10-01T15:00:00", "total_cost": 18.0 }),
        )
        .await;
    assert_eq!(corrected.body["total_cost"], 18.0);
}

#[tokio::test]
async fn test_unknown_vehicle_or_user_is_rejected() {
    let app = TestApp::new().await;
    let (_, admin_token) = app.admin().await;
    let (_, token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&token).await;

    let no_vehicle = app
        .post(
            "/rentals/",
            Some(&token),
            json!({ "vehicle_id": 999, "start_time": "2023-10-01T10:00:00" }),
        )
        .await;
    assert_eq!(no_vehicle.status, StatusCode::BAD_REQUEST);

    let no_user = app
        .post(
            "/rentals/",
            Some(&admin_token),
            json!({
                "user_id": 999,
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T10:00:00"
            }),
        )
        .await;
    assert_eq!(no_user.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_rentals_are_rejected() {
    let app = TestApp::new().await;
    let (_, token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&token).await;

    let inverted = app
        .post(
            "/rentals/",
            Some(&token),
            json!({
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T12:00:00",
                "end_time": "2023-10-01T10:00:00"
            }),
        )
        .await;
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);

    let bad_time = app
        .post(
            "/rentals/",
            Some(&token),
            json!({ "vehicle_id": vehicle_id, "start_time": "yesterday" }),
        )
        .await;
    assert_eq!(bad_time.status, StatusCode::BAD_REQUEST);

    app.put(
        &format!("/vehicles/{}", vehicle_id),
        Some(&token),
        json!({ "available": false }),
    )
    .await;
    let unavailable = app
        .post(
            "/rentals/",
            Some(&token),
            json!({ "vehicle_id": vehicle_id, "start_time": "2023-10-01T10:00:00" }),
        )
        .await;
    assert_eq!(unavailable.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_riders_only_touch_their_own_rentals() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.rider("owner").await;
    let (_, other_token) = app.rider("other").await;
    let vehicle_id = app.city_bike(&owner_token).await;

    let rental = app
        .post(
            "/rentals/",
            Some(&owner_token),
            json!({ "vehicle_id": vehicle_id, "start_time": "2023-10-01T10:00:00" }),
        )
        .await;
    let uri = format!("/rentals/{}", rental.body["id"]);

    assert_eq!(app.get(&uri, Some(&other_token)).await.status, StatusCode::FORBIDDEN);
    assert_eq!(
        app.put(&uri, Some(&other_token), json!({ "total_cost": 0.0 }))
            .await
            .status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(app.delete(&uri, Some(&other_token)).await.status, StatusCode::FORBIDDEN);

    let for_someone_else = app
        .post(
            "/rentals/",
            Some(&other_token),
            json!({
                "user_id": owner_id,
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T10:00:00"
            }),
        )
        .await;
    assert_eq!(for_someone_else.status, StatusCode::FORBIDDEN);

    let other_list = app.get("/rentals/", Some(&other_token)).await;
    assert_eq!(other_list.status, StatusCode::OK);
    assert!(other_list.body.as_array().unwrap().is_empty());

    let owner_list = app.get("/rentals", Some(&owner_token)).await;
    assert_eq!(owner_list.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_sees_and_manages_all_rentals() {
    let app = TestApp::new().await;
    let (_, admin_token) = app.admin().await;
    let (rider_id, rider_token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&rider_token).await;

    let on_behalf = app
        .post(
            "/rentals/",
            Some(&admin_token),
            json!({
                "user_id": rider_id,
                "vehicle_id": vehicle_id,
                "start_time": "2023-10-01T10:00:00"
            }),
        )
        .await;
    assert_eq!(on_behalf.status, StatusCode::CREATED);
    assert_eq!(on_behalf.body["user_id"], rider_id);

    let all = app.get("/rentals/", Some(&admin_token)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 1);

    let uri = format!("/rentals/{}", on_behalf.body["id"]);
    assert_eq!(app.delete(&uri, Some(&admin_token)).await.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_rentals() {
    let app = TestApp::new().await;
    let (_, admin_token) = app.admin().await;
    let (rider_id, rider_token) = app.rider("tester").await;
    let vehicle_id = app.city_bike(&rider_token).await;

    for start in ["2023-10-01T10:00:00", "2023-10-02T10:00:00"] {
        let created = app
            .post(
                "/rentals/",
                Some(&rider_token),
                json!({ "vehicle_id": vehicle_id, "start_time": start }),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
    }
    assert_eq!(
        app.get("/rentals/", Some(&admin_token)).await.body.as_array().unwrap().len(),
        2
    );

    let deleted = app
        .delete(&format!("/users/{}", rider_id), Some(&admin_token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let remaining = app.get("/rentals/", Some(&admin_token)).await;
    assert!(remaining.body.as_array().unwrap().is_empty());
    assert_eq!(app.state.db.rentals().count_for_user(rider_id).await.unwrap(), 0);

    // The vehicle is free to leave the catalog once its rentals are gone
    let vehicle_deleted = app
        .delete(&format!("/vehicles/{}", vehicle_id), Some(&admin_token))
        .await;
    assert_eq!(vehicle_deleted.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_rentals_require_a_token() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/rentals/", None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.get("/rentals/1", None).await.status, StatusCode::UNAUTHORIZED);
}
