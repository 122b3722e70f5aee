use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::sale_dto::{HistoryQuery, RegisterSaleRequest, RegisterSaleResponse};
use crate::dto::vehicle_dto::{VehicleQuery, VehicleResponse};
use crate::middleware::auth::{require_vendor, AuthenticatedVendor};
use crate::models::purchase_type::PurchaseType;
use crate::models::sale::SaleSummary;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_sales_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(register_sale))
        .route("/autos", get(list_vehicles))
        .route("/tipos-compra", get(list_purchase_types))
        .route("/mis-ventas", get(my_sales))
        .route_layer(from_fn_with_state(state, require_vendor))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleQuery>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let vehicles = state
        .sales
        .list_available_vehicles(query.search.as_deref())
        .await?;

    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

async fn list_purchase_types(State(state): State<AppState>) -> AppResult<Json<Vec<PurchaseType>>> {
    Ok(Json(state.sales.list_purchase_types().await?))
}

async fn register_sale(
    State(state): State<AppState>,
    Extension(vendor): Extension<AuthenticatedVendor>,
    Json(request): Json<RegisterSaleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RegisterSaleResponse>>)> {
    request.validate()?;

    let id = state.sales.register_sale(request.into_new_sale(&vendor)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            RegisterSaleResponse { id },
            "Venta registrada exitosamente".to_string(),
        )),
    ))
}

async fn my_sales(
    State(state): State<AppState>,
    Extension(vendor): Extension<AuthenticatedVendor>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<SaleSummary>>> {
    let sales = state
        .sales
        .list_sales_for_vendor(vendor.id, query.effective_limit())
        .await?;

    Ok(Json(sales))
}
