pub mod echo;
pub mod health;
pub mod messages;

use crate::error::Error;

pub async fn not_found() -> Error {
    Error::NotFound("Not found".to_string())
}

pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
