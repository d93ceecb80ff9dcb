use lambda_http::{http::StatusCode, Body, Request, RequestExt as _, Response};
use query_use_case::{self, get_movie::HasGetMovie};

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    id: String,
    overview: String,
    release_date: String,
    title: String,
}

impl From<query_use_case::get_movie::Output> for ResponseBody {
    fn from(
        query_use_case::get_movie::Output {
            id,
            overview,
            release_date,
            title,
        }: query_use_case::get_movie::Output,
    ) -> Self {
        Self {
            id,
            overview,
            release_date,
            title,
        }
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ErrorResponseBody {
    message: String,
    error: String,
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct MessageResponseBody {
    message: String,
}

pub async fn handler<T: HasGetMovie>(
    state: &T,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    tracing::info!(event = ?event, "get movie request");
    let movie_id = event
        .path_parameters()
        .first("movieId")
        .map(ToOwned::to_owned)
        .filter(|movie_id| !movie_id.is_empty());
    let movie_id = match movie_id {
        None => {
            return super::json_response(
                StatusCode::BAD_REQUEST,
                &MessageResponseBody {
                    message: "Missing movie ID".to_owned(),
                },
            )
        }
        Some(movie_id) => movie_id,
    };
    let use_case = state.get_movie();
    match use_case
        .execute(query_use_case::get_movie::Input { movie_id })
        .await
    {
        Ok(output) => super::json_response(StatusCode::OK, &ResponseBody::from(output)),
        Err(query_use_case::get_movie::Error::MovieNotFound(_)) => super::json_response(
            StatusCode::NOT_FOUND,
            &MessageResponseBody {
                message: "Movie not found".to_owned(),
            },
        ),
        Err(error) => {
            tracing::error!(error = ?error, "failed to get movie");
            super::json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponseBody {
                    message: "Failed to get the movie".to_owned(),
                    error: super::error_message(&error),
                },
            )
        }
    }
}
