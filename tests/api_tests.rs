mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use automotriz_jj::models::vendor::VendorRole;
use automotriz_jj::utils::errors::{INVALID_CREDENTIALS, UNAUTHORIZED};
use common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new(false).await;
    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_root_reports_version() {
    let app = TestApp::new(false).await;
    let (status, body) = app.get("/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "operational");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = TestApp::new(false).await;
    app.add_vendor("vendorA", "pw1", VendorRole::Seller, "LIMA").await;

    let (status, body) = app.login("vendorA", "pw1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 30 * 60);
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new(false).await;
    app.add_vendor("vendorA", "pw1", VendorRole::Seller, "LIMA").await;
    app.add_vendor("retired", "pw2", VendorRole::Seller, "LIMA").await;
    app.send_json(
        Method::PUT,
        "/admin/vendedores/retired/activo",
        &admin_token(&app).await,
        json!({ "active": false }),
    )
    .await;

    let (s1, b1) = app.login("ghost", "pw1").await;
    let (s2, b2) = app.login("vendorA", "wrong").await;
    let (s3, b3) = app.login("retired", "pw2").await;

    for (status, body) in [(s1, &b1), (s2, &b2), (s3, &b3)] {
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], INVALID_CREDENTIALS);
    }
    assert_eq!(b1, b2);
    assert_eq!(b2, b3);
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = TestApp::new(false).await;
    app.add_vendor("vendorA", "pw1", VendorRole::Seller, "PIURA").await;
    let token = app.token_for("vendorA", "pw1").await;

    let (status, body) = app.get("/auth/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vendor"]["username"], "vendorA");
    assert_eq!(body["vendor"]["branch"], "PIURA");
    assert_eq!(body["vendor"]["role"], "seller");
    assert!(body["vendor"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new(false).await;

    for uri in ["/auth/me", "/ventas/autos", "/ventas/tipos-compra", "/ventas/mis-ventas"] {
        let (status, body) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["message"], UNAUTHORIZED);
    }

    let (status, _) = app.get("/ventas/autos", Some("not-a-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deactivated_vendor_token_stops_working() {
    let app = TestApp::new(false).await;
    app.add_vendor("vendorA", "pw1", VendorRole::Seller, "LIMA").await;
    let token = app.token_for("vendorA", "pw1").await;
    let admin = admin_token(&app).await;

    let (status, _) = app
        .send_json(Method::PUT, "/admin/vendedores/vendorA/activo", &admin, json!({ "active": false }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.send_json(Method::PUT, "/admin/vendedores/vendorA/activo", &admin, json!({ "active": true }))
        .await;
    let (status, _) = app.get("/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_routes_reject_sellers() {
    let app = TestApp::new(false).await;
    app.add_vendor("vendorA", "pw1", VendorRole::Seller, "LIMA").await;
    let token = app.token_for("vendorA", "pw1").await;

    let (status, _) = app
        .send_json(Method::PUT, "/admin/vendedores/vendorA/activo", &token, json!({ "active": false }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send_json(
            Method::PUT,
            "/admin/vendedores/nobody/activo",
            &admin_token(&app).await,
            json!({ "active": false }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seeded_admin_can_login() {
    let app = TestApp::new(true).await;

    let (status, body) = app.login("admin", "admin123").await;
    assert_eq!(status, StatusCode::OK);

    let token = body["access_token"].as_str().unwrap();
    let (status, body) = app.get("/ventas/autos", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 24);

    let (_, body) = app.get("/ventas/tipos-compra", Some(token)).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cash", "Crédito"]);
}

async fn admin_token(app: &TestApp) -> String {
    app.add_vendor("boss", "boss-pw", VendorRole::Admin, "LIMA").await;
    app.token_for("boss", "boss-pw").await
}
