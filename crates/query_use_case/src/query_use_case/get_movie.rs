use std::{str::FromStr as _, sync::Arc};

use domain::value_object::MovieId;

use crate::port::{HasMovieReader, MovieQueryData};
#[cfg(any(test, feature = "test-util"))]
use crate::port::MovieReader;

pub struct Input {
    pub movie_id: String,
}

pub struct Output {
    pub id: String,
    pub overview: String,
    pub release_date: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("movie get")]
    MovieGet(#[source] crate::port::movie_reader::Error),
    #[error("movie id")]
    MovieId(#[source] domain::value_object::movie_id::Error),
    #[error("movie not found")]
    MovieNotFound(MovieId),
}

#[async_trait::async_trait]
pub trait GetMovie: HasMovieReader {
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let movie_reader = self.movie_reader();
        let movie_id = MovieId::from_str(&input.movie_id).map_err(Error::MovieId)?;
        movie_reader
            .get(movie_id)
            .await
            .map_err(Error::MovieGet)?
            .ok_or(Error::MovieNotFound(movie_id))
            .map(
                |MovieQueryData {
                     id,
                     overview,
                     release_date,
                     title,
                 }| Output {
                    id: id.to_string(),
                    overview,
                    release_date: release_date.to_string(),
                    title,
                },
            )
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GetMovie {}

    impl HasMovieReader for GetMovie {
        fn movie_reader(&self) -> Arc<dyn MovieReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl GetMovie for GetMovie {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGetMovie {
    fn get_movie(&self) -> Arc<dyn GetMovie + Send + Sync>;
}
