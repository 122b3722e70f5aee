#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use automotriz_jj::config::database::DatabaseConfig;
use automotriz_jj::config::environment::EnvironmentConfig;
use automotriz_jj::database::DatabaseConnection;
use automotriz_jj::models::vehicle::{NewVehicle, Vehicle};
use automotriz_jj::models::vendor::{NewVendor, Vendor, VendorRole};
use automotriz_jj::repositories::{PurchaseTypeRepository, VehicleRepository, VendorRepository};
use automotriz_jj::services::PasswordHasher;
use automotriz_jj::{create_router, AppState};

pub const TEST_COST: u32 = 4;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub hasher: PasswordHasher,
}

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        bcrypt_cost: TEST_COST,
        seed_data: false,
        ..EnvironmentConfig::default()
    }
}

impl TestApp {
    /// App sobre una base en memoria con el schema aplicado
    pub async fn new(seed_data: bool) -> Self {
        let config = test_config();
        let hasher = PasswordHasher::new(TEST_COST);
        let pool = DatabaseConfig::create_test_pool().await.unwrap();
        let pool = DatabaseConnection::prepare(pool, seed_data, &hasher)
            .await
            .unwrap()
            .pool()
            .clone();

        let state = AppState::new(pool.clone(), config).unwrap();

        Self {
            router: create_router(state),
            pool,
            hasher,
        }
    }

    pub async fn add_vendor(&self, username: &str, password: &str, role: VendorRole, branch: &str) -> Vendor {
        let vendor = NewVendor {
            username: username.to_string(),
            password_hash: self.hasher.hash(password).unwrap(),
            full_name: format!("{} Test", username),
            email: None,
            role,
            vendor_code: format!("V-{}", username),
            branch: branch.to_string(),
        };
        VendorRepository::new(self.pool.clone()).create(&vendor).await.unwrap()
    }

    pub async fn add_vehicle(&self, make: &str, model: &str, year: i32, stock: i32) -> Vehicle {
        let vehicle = NewVehicle::new(make, model, year, 85000.0).with_stock(stock);
        VehicleRepository::new(self.pool.clone()).create(&vehicle).await.unwrap()
    }

    pub async fn add_purchase_type(&self, name: &str) -> i64 {
        PurchaseTypeRepository::new(self.pool.clone())
            .create(name, None)
            .await
            .unwrap()
            .id
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={}&password={}", username, password)))
            .unwrap();
        self.send(request).await
    }

    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let (status, body) = self.login(username, password).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}
