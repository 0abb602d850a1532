use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
    list_users::ListUsersUseCase, update_user::UpdateUserUseCase,
};
use crate::domain::repositories::UserRepository;

#[derive(Clone)]
pub struct ApiState {
    pub list_users: Arc<ListUsersUseCase>,
    pub get_user: Arc<GetUserUseCase>,
    pub create_user: Arc<CreateUserUseCase>,
    pub update_user: Arc<UpdateUserUseCase>,
    pub delete_user: Arc<DeleteUserUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            list_users: Arc::new(ListUsersUseCase::new(repo.clone())),
            get_user: Arc::new(GetUserUseCase::new(repo.clone())),
            create_user: Arc::new(CreateUserUseCase::new(repo.clone())),
            update_user: Arc::new(UpdateUserUseCase::new(repo.clone())),
            delete_user: Arc::new(DeleteUserUseCase::new(repo)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
}
