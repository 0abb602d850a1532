use crate::{domain::models::User, presentation::http::responses::UserDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: Some(user.id),
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

/// Serializes as `{}`; returned in place of a 404 when no row matched.
pub fn empty_user() -> UserDto {
    UserDto {
        id: None,
        name: None,
        email: None,
    }
}
