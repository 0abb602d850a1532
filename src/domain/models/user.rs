#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}
