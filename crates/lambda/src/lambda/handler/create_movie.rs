use command_use_case::{self, create_movie::HasCreateMovie};
use lambda_http::{http::StatusCode, Body, Request, Response};

#[derive(serde::Deserialize, serde::Serialize)]
struct RequestBody {
    id: i64,
    overview: String,
    release_date: String,
    title: String,
}

impl From<RequestBody> for command_use_case::create_movie::Input {
    fn from(
        RequestBody {
            id,
            overview,
            release_date,
            title,
        }: RequestBody,
    ) -> Self {
        Self {
            movie_id: id,
            overview,
            release_date,
            title,
        }
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    movie_id: String,
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

pub async fn handler<T: HasCreateMovie>(
    state: &T,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    tracing::info!(event = ?event, "create movie request");
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
    let use_case = state.create_movie();
    match use_case
        .execute(command_use_case::create_movie::Input::from(body))
        .await
    {
        Ok(output) => super::json_response(
            StatusCode::OK,
            &ResponseBody {
                movie_id: output.movie_id.to_string(),
            },
        ),
        Err(error) => {
            tracing::error!(error = ?error, "failed to create movie");
            super::json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponseBody {
                    message: "Failed to add the movie".to_owned(),
                    error: super::error_message(&error),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use command_use_case::create_movie::MockCreateMovie;
    use domain::value_object::MovieId;

    use crate::lambda::handler::tests::{assert_json_content_type, ResponseExt as _};

    use super::*;

    #[tokio::test]
    async fn test_happy_path() -> Result<(), lambda_http::Error> {
        let mocks = Mocks::with_happy_path_behavior();
        let response = handler(&mocks, build_request(&build_request_body())?).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_json_content_type(&response);
        assert_eq!(
            response.into_body_as_json::<ResponseBody>()?,
            ResponseBody {
                movie_id: "42".to_owned()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_body() -> Result<(), lambda_http::Error> {
        let mut create_movie = MockCreateMovie::new();
        create_movie.expect_execute().never();
        let mocks = Mocks {
            create_movie: Arc::new(create_movie),
        };
        let request = lambda_http::http::Request::builder()
            .method("POST")
            .uri("/movies")
            .body(Body::from("not json"))?;
        let response = handler(&mocks, request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_json_content_type(&response);
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
        let mut create_movie = MockCreateMovie::new();
        create_movie.expect_execute().return_once(|_| {
            Err(command_use_case::create_movie::Error::MovieStore(
                command_use_case::port::movie_repository::Error::from(build_error()),
            ))
        });
        let mocks = Mocks {
            create_movie: Arc::new(create_movie),
        };
        let response = handler(&mocks, build_request(&build_request_body())?).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_json_content_type(&response);
        assert_eq!(
            response.into_body_as_json::<ErrorResponseBody>()?,
            ErrorResponseBody {
                message: "Failed to add the movie".to_owned(),
                error: "error".to_owned()
            }
        );
        Ok(())
    }

    #[derive(Clone)]
    struct Mocks {
        create_movie: Arc<MockCreateMovie>,
    }

    impl Mocks {
        fn with_happy_path_behavior() -> Self {
            let mut create_movie = MockCreateMovie::new();
            create_movie.expect_execute().return_once(|input| {
                assert_eq!(input.movie_id, 42);
                assert_eq!(input.overview, "overview1");
                assert_eq!(input.release_date, "2023-05-17");
                assert_eq!(input.title, "title1");
                Ok(command_use_case::create_movie::Output {
                    movie_id: MovieId::from(42),
                })
            });
            Self {
                create_movie: Arc::new(create_movie),
            }
        }
    }

    impl command_use_case::create_movie::HasCreateMovie for Mocks {
        fn create_movie(
            &self,
        ) -> Arc<dyn command_use_case::create_movie::CreateMovie + Send + Sync> {
            self.create_movie.clone()
        }
    }

    fn build_error() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, "error"))
    }

    fn build_request_body() -> RequestBody {
        RequestBody {
            id: 42,
            overview: "overview1".to_owned(),
            release_date: "2023-05-17".to_owned(),
            title: "title1".to_owned(),
        }
    }

    fn build_request(request_body: &RequestBody) -> anyhow::Result<Request> {
        Ok(lambda_http::http::Request::builder()
            .method("POST")
            .uri("/movies")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(request_body)?))?)
    }
}
