use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::error::Error;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// JSON object body that has been deserialized and validated. Any rejection
/// from the JSON extractor, or a body that is not an object, becomes a 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<JsonValue>::from_request(req, state)
            .await
            .map_err(|rejection| Error::BadRequest(rejection.body_text()))?;
        if !body.is_object() {
            return Err(Error::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let value: T = serde_json::from_value(body)
            .map_err(|e| Error::BadRequest(format!("Invalid request body: {}", e)))?;
        validate(&value)?;
        Ok(Self(value))
    }
}
