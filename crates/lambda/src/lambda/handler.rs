pub mod create_movie;
pub mod delete_movie;
pub mod get_movie;
pub mod list_movies;
pub mod update_movie;

use lambda_http::{http::StatusCode, Body, Response};

pub(crate) fn json_response<T: serde::Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body)?))?)
}

// The body of an error response carries the innermost cause, so a store
// failure message reaches the caller unwrapped.
pub(crate) fn error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut cause = error;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}
