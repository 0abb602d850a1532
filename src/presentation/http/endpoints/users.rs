use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use tracing::error;

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    domain::errors::ServiceError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{empty_user, map_user},
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{
            DeleteAckDto, ErrorDto, UserDeleteResponse, UserFetchResponse, UserListResponse,
            UserWriteResponse,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> UserListResponse {
        match self.state.list_users.execute().await {
            Ok(users) => UserListResponse::Ok(Json(users.iter().map(map_user).collect())),
            Err(err) => {
                UserListResponse::ServerError(operational_error("failed to fetch users", &err))
            }
        }
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<i32>) -> UserFetchResponse {
        match self.state.get_user.execute(id.0).await {
            Ok(Some(user)) => UserFetchResponse::Ok(Json(map_user(&user))),
            Ok(None) => UserFetchResponse::Ok(Json(empty_user())),
            Err(err) => {
                UserFetchResponse::ServerError(operational_error("failed to fetch user", &err))
            }
        }
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<CreateUserRequestDto>) -> UserWriteResponse {
        let payload = CreateUserRequest {
            name: request.0.name,
            email: request.0.email,
        };

        match self.state.create_user.execute(payload).await {
            Ok(user) => UserWriteResponse::Ok(Json(map_user(&user))),
            Err(ServiceError::Validation(message)) => {
                UserWriteResponse::BadRequest(Json(ErrorDto { error: message }))
            }
            Err(err) => {
                UserWriteResponse::ServerError(operational_error("failed to create user", &err))
            }
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<i32>,
        request: Json<UpdateUserRequestDto>,
    ) -> UserWriteResponse {
        let payload = UpdateUserRequest {
            id: id.0,
            name: request.0.name,
            email: request.0.email,
        };

        match self.state.update_user.execute(payload).await {
            Ok(Some(user)) => UserWriteResponse::Ok(Json(map_user(&user))),
            Ok(None) => UserWriteResponse::Ok(Json(empty_user())),
            Err(ServiceError::Validation(message)) => {
                UserWriteResponse::BadRequest(Json(ErrorDto { error: message }))
            }
            Err(err) => {
                UserWriteResponse::ServerError(operational_error("failed to update user", &err))
            }
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<i32>) -> UserDeleteResponse {
        match self.state.delete_user.execute(id.0).await {
            Ok(()) => UserDeleteResponse::Ok(Json(DeleteAckDto { success: true })),
            Err(err) => {
                UserDeleteResponse::ServerError(operational_error("failed to delete user", &err))
            }
        }
    }
}

// The client gets the fixed message; the underlying error only goes to the log.
fn operational_error(message: &str, err: &ServiceError) -> Json<ErrorDto> {
    error!(error = %err, "{}", message);
    Json(ErrorDto {
        error: message.to_string(),
    })
}
