pub mod api_response;
pub mod auth_dto;
pub mod sale_dto;
pub mod vehicle_dto;
