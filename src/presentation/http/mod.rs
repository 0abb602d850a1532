use std::sync::Arc;

use poem::{
    EndpointExt, Route,
    middleware::{Cors, CorsEndpoint},
};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    health::HealthEndpoints, root::ApiState, users::UsersEndpoints,
};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

pub fn build_app(state: Arc<ApiState>) -> CorsEndpoint<Route> {
    let api_service = OpenApiService::new(
        (UsersEndpoints::new(state), HealthEndpoints),
        "Users API",
        "0.1.0",
    )
    .server("/api");
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .with(Cors::new())
}
