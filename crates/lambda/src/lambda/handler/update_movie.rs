use command_use_case::{self, update_movie::HasUpdateMovie};
use lambda_http::{http::StatusCode, Body, Request, RequestExt as _, Response};

#[derive(serde::Deserialize, serde::Serialize)]
struct RequestBody {
    overview: String,
    release_date: String,
    title: String,
}

fn input_from_request(
    movie_id: String,
    RequestBody {
        overview,
        release_date,
        title,
    }: RequestBody,
) -> command_use_case::update_movie::Input {
    command_use_case::update_movie::Input {
        movie_id,
        overview,
        release_date,
        title,
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ErrorResponseBody {
    message: String,
    error: String,
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct MessageResponseBody {
    message: String,
}

pub async fn handler<T: HasUpdateMovie>(
    state: &T,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    tracing::info!(event = ?event, "update movie request");
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
    let body = match serde_json::from_slice::<RequestBody>(event.body()) {
        Err(_) => {
            return super::json_response(
                StatusCode::BAD_REQUEST,
                &MessageResponseBody {
                    message: "Invalid request body".to_owned(),
                },
            )
        }
        Ok(body) => body,
    };
    let use_case = state.update_movie();
    match use_case.execute(input_from_request(movie_id, body)).await {
        Ok(_) => super::json_response(StatusCode::OK, &ResponseBody {}),
        Err(error) => {
            tracing::error!(error = ?error, "failed to update movie");
            super::json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponseBody {
                    message: "Failed to update the movie".to_owned(),
                    error: super::error_message(&error),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use command_use_case::update_movie::MockUpdateMovie;
    use lambda_http::RequestExt as _;

    use crate::lambda::handler::tests::{assert_json_content_type, ResponseExt as _};

    use super::*;

    #[tokio::test]
    async fn test_happy_path() -> Result<(), lambda_http::Error> {
        let mocks = Mocks::with_happy_path_behavior();
        let response = handler(&mocks, build_request(Some("42"), &build_request_body())?).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_json_content_type(&response);
        assert_eq!(
            response.into_body_as_json::<ResponseBody>()?,
            ResponseBody {}
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_movie_id() -> Result<(), lambda_http::Error> {
        let mut update_movie = MockUpdateMovie::new();
        update_movie.expect_execute().never();
        let mocks = Mocks {
            update_movie: Arc::new(update_movie),
        };
        let response = handler(&mocks, build_request(None, &build_request_body())?).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_json_content_type(&response);
        assert_eq!(
            response.into_body_as_json::<MessageResponseBody>()?,
            MessageResponseBody {
                message: "Missing movie ID".to_owned()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_body() -> Result<(), lambda_http::Error> {
        let mut update_movie = MockUpdateMovie::new();
        update_movie.expect_execute().never();
        let mocks = Mocks {
            update_movie: Arc::new(update_movie),
        };
        let request = lambda_http::http::Request::builder()
            .method("PUT")
            .uri("/movies/42")
            .body(Body::from("not json"))?
            .with_path_parameters(HashMap::from([(
                "movieId".to_owned(),
                "42".to_owned(),
            )]));
        let response = handler(&mocks, request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.into_body_as_json::<MessageResponseBody>()?,
            MessageResponseBody {
                message: "Invalid request body".to_owned()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_error() -> Result<(), lambda_http::Error> {
        let mut update_movie = MockUpdateMovie::new();
        update_movie.expect_execute().return_once(|_| {
            Err(command_use_case::update_movie::Error::MovieStore(
                command_use_case::port::movie_repository::Error::from(build_error()),
            ))
        });
        let mocks = Mocks {
            update_movie: Arc::new(update_movie),
        };
        let response = handler(&mocks, build_request(Some("42"), &build_request_body())?).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_json_content_type(&response);
        assert_eq!(
            response.into_body_as_json::<ErrorResponseBody>()?,
            ErrorResponseBody {
                message: "Failed to update the movie".to_owned(),
                error: "error".to_owned()
            }
        );
        Ok(())
    }

    #[derive(Clone)]
    struct Mocks {
        update_movie: Arc<MockUpdateMovie>,
    }

    impl Mocks {
        fn with_happy_path_behavior() -> Self {
            let mut update_movie = MockUpdateMovie::new();
            update_movie.expect_execute().return_once(|input| {
                assert_eq!(input.movie_id, "42");
                assert_eq!(input.overview, "overview2");
                assert_eq!(input.release_date, "2024-01-09");
                assert_eq!(input.title, "title2");
                Ok(command_use_case::update_movie::Output)
            });
            Self {
                update_movie: Arc::new(update_movie),
            }
        }
    }

    impl command_use_case::update_movie::HasUpdateMovie for Mocks {
        fn update_movie(
            &self,
        ) -> Arc<dyn command_use_case::update_movie::UpdateMovie + Send + Sync> {
            self.update_movie.clone()
        }
    }

    fn build_error() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, "error"))
    }

    fn build_request_body() -> RequestBody {
        RequestBody {
            overview: "overview2".to_owned(),
            release_date: "2024-01-09".to_owned(),
            title: "title2".to_owned(),
        }
    }

    fn build_request(movie_id: Option<&str>, request_body: &RequestBody) -> anyhow::Result<Request> {
        let request = lambda_http::http::Request::builder()
            .method("PUT")
            .uri("/movies/42")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(request_body)?))?;
        Ok(match movie_id {
            None => request,
            Some(movie_id) => request.with_path_parameters(HashMap::from([(
                "movieId".to_owned(),
                movie_id.to_owned(),
            )])),
        })
    }
}
