use std::{str::FromStr as _, sync::Arc};

use domain::{
    aggregate::Movie,
    value_object::{MovieId, ReleaseDate},
};

#[cfg(any(test, feature = "test-util"))]
use crate::port::MovieRepository;
use crate::port::HasMovieRepository;

pub struct Input {
    pub movie_id: i64,
    pub overview: String,
    pub release_date: String,
    pub title: String,
}

pub struct Output {
    pub movie_id: MovieId,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("movie store")]
    MovieStore(#[source] crate::port::movie_repository::Error),
    #[error("release date")]
    ReleaseDate(#[source] domain::value_object::release_date::Error),
}

#[async_trait::async_trait]
pub trait CreateMovie: HasMovieRepository {
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let movie_repository = self.movie_repository();
        let movie_id = MovieId::from(input.movie_id);
        let release_date =
            ReleaseDate::from_str(&input.release_date).map_err(Error::ReleaseDate)?;
        let movie = Movie::new(movie_id, input.overview, release_date, input.title);
        movie_repository
            .put(&movie)
            .await
            .map_err(Error::MovieStore)?;
        Ok(Output { movie_id })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub CreateMovie {}

    impl HasMovieRepository for CreateMovie {
        fn movie_repository(&self) -> Arc<dyn MovieRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl CreateMovie for CreateMovie {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasCreateMovie {
    fn create_movie(&self) -> Arc<dyn CreateMovie + Send + Sync>;
}
