use std::{str::FromStr as _, sync::Arc};

use domain::value_object::MovieId;

#[cfg(any(test, feature = "test-util"))]
use crate::port::MovieRepository;
use crate::port::HasMovieRepository;

pub struct Input {
    pub movie_id: String,
}

pub struct Output {
    pub movie_id: MovieId,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("movie delete")]
    MovieDelete(#[source] crate::port::movie_repository::Error),
    #[error("movie id")]
    MovieId(#[source] domain::value_object::movie_id::Error),
}

#[async_trait::async_trait]
pub trait DeleteMovie: HasMovieRepository {
    // Delete-by-key acknowledges success whether or not a matching record
    // existed, so there is no not-found outcome on this path.
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let movie_repository = self.movie_repository();
        let movie_id = MovieId::from_str(&input.movie_id).map_err(Error::MovieId)?;
        movie_repository
            .delete(movie_id)
            .await
            .map_err(Error::MovieDelete)?;
        Ok(Output { movie_id })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub DeleteMovie {}

    impl HasMovieRepository for DeleteMovie {
        fn movie_repository(&self) -> Arc<dyn MovieRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl DeleteMovie for DeleteMovie {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasDeleteMovie {
    fn delete_movie(&self) -> Arc<dyn DeleteMovie + Send + Sync>;
}
