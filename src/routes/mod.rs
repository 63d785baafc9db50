use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use crate::error::ApiError;

pub mod drives;
pub mod games;
pub mod plays;
pub mod recruiting;

/// `Query` whose rejection is reported through `ApiError`, so malformed query
/// strings get the same JSON error body as missing filters.
pub struct Filters<T>(pub T);

impl<T, S> FromRequestParts<S> for Filters<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Filters(params))
    }
}
