use command_use_case::{self, delete_movie::HasDeleteMovie};
use lambda_http::{http::StatusCode, Body, Request, RequestExt as _, Response};

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    message: String,
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ErrorResponseBody {
    message: String,
    error: String,
}

pub async fn handler<T: HasDeleteMovie>(
    state: &T,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    tracing::info!(event = ?event, "delete movie request");
    let movie_id = event
        .path_parameters()
        .first("movieId")
        .map(ToOwned::to_owned)
        .filter(|movie_id| !movie_id.is_empty());
    let movie_id = match movie_id {
        None => {
            return super::json_response(
                StatusCode::BAD_REQUEST,
                &ResponseBody {
                    message: "Missing movie ID".to_owned(),
                },
            )
        }
        Some(movie_id) => movie_id,
    };
    let use_case = state.delete_movie();
    match use_case
        .execute(command_use_case::delete_movie::Input { movie_id })
        .await
    {
        Ok(output) => super::json_response(
            StatusCode::OK,
            &ResponseBody {
                message: format!("Record with ID {} deleted successfully", output.movie_id),
            },
        ),
        Err(error) => {
            tracing::error!(error = ?error, "failed to delete movie");
            super::json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponseBody {
                    message: "Failed to delete the record".to_owned(),
                    error: super::error_message(&error),
                },
            )
        }
    }
}
