use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::JsonApiError;

/// `Json<T>` whose rejections use the JSON error envelope instead of plain text.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(JsonApiError::new(rejection.status(), "Invalid Body", Some(rejection.body_text()))),
        }
    }
}

/// A record kind addressed by `/:id`; `NAME` is used in not-found messages.
pub trait RecordKind {
    const NAME: &'static str;
}

/// The `:id` path segment of one record kind.
///
/// A segment that is not a UUID can never match a stored record, so it gets
/// the same 404 envelope as an unknown id.
pub struct RecordId<K>(pub Uuid, pub PhantomData<K>);

#[async_trait]
impl<S, K> FromRequestParts<S> for RecordId<K>
where
    S: Send + Sync,
    K: RecordKind,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<Uuid>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RecordId(id, PhantomData)),
            Err(rejection) => {
                debug!(path = %parts.uri.path(), reason = %rejection.body_text(), "unparseable record id");
                Err(JsonApiError::not_found(K::NAME))
            }
        }
    }
}
