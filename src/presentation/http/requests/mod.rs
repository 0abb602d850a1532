use poem_openapi::Object;

/// Fields are optional at the wire level so a missing field surfaces as a
/// validation failure rather than a payload parse error.
#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
}
