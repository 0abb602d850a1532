use poem_openapi::{ApiResponse, Object, payload::Json};

/// A user row. Every field is optional so the same shape can serialize as
/// an empty object when no row matched.
#[derive(Object)]
pub struct UserDto {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
}

#[derive(Object)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Object)]
pub struct DeleteAckDto {
    pub success: bool,
}

#[derive(ApiResponse)]
pub enum UserListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 500)]
    ServerError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum UserFetchResponse {
    /// The matching row, or an empty object when no row matched.
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 500)]
    ServerError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum UserWriteResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    ServerError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum UserDeleteResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteAckDto>),
    #[oai(status = 500)]
    ServerError(Json<ErrorDto>),
}
