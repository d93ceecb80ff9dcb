use lambda_http::{http::StatusCode, Body, Request, Response};
use query_use_case::{self, list_movies::HasListMovies};

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    movies: Vec<ResponseBodyMovie>,
}

impl From<query_use_case::list_movies::Output> for ResponseBody {
    fn from(
        query_use_case::list_movies::Output(movies): query_use_case::list_movies::Output,
    ) -> Self {
        Self {
            movies: movies.into_iter().map(ResponseBodyMovie::from).collect(),
        }
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBodyMovie {
    id: String,
    overview: String,
    release_date: String,
    title: String,
}

impl From<query_use_case::list_movies::Movie> for ResponseBodyMovie {
    fn from(
        query_use_case::list_movies::Movie {
            id,
            overview,
            release_date,
            title,
        }: query_use_case::list_movies::Movie,
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

pub async fn handler<T: HasListMovies>(
    state: &T,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    tracing::info!(event = ?event, "list movies request");
    let use_case = state.list_movies();
    match use_case.execute(query_use_case::list_movies::Input).await {
        Ok(output) => super::json_response(StatusCode::OK, &ResponseBody::from(output)),
        Err(error) => {
            tracing::error!(error = ?error, "failed to list movies");
            super::json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponseBody {
                    message: "Failed to list the movies".to_owned(),
                    error: super::error_message(&error),
                },
            )
        }
    }
}
