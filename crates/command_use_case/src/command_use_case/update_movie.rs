use std::{str::FromStr as _, sync::Arc};

use domain::{
    aggregate::Movie,
    value_object::{MovieId, ReleaseDate},
};

#[cfg(any(test, feature = "test-util"))]
use crate::port::MovieRepository;
use crate::port::HasMovieRepository;

pub struct Input {
    pub movie_id: String,
    pub overview: String,
    pub release_date: String,
    pub title: String,
}

pub struct Output;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("movie id")]
    MovieId(#[source] domain::value_object::movie_id::Error),
    #[error("movie store")]
    MovieStore(#[source] crate::port::movie_repository::Error),
    #[error("release date")]
    ReleaseDate(#[source] domain::value_object::release_date::Error),
}

#[async_trait::async_trait]
pub trait UpdateMovie: HasMovieRepository {
    // Put-by-key replaces the record unconditionally; updating an absent id
    // writes a fresh record rather than failing.
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let movie_repository = self.movie_repository();
        let movie_id = MovieId::from_str(&input.movie_id).map_err(Error::MovieId)?;
        let release_date =
            ReleaseDate::from_str(&input.release_date).map_err(Error::ReleaseDate)?;
        let movie = Movie::new(movie_id, input.overview, release_date, input.title);
        movie_repository
            .put(&movie)
            .await
            .map_err(Error::MovieStore)?;
        Ok(Output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub UpdateMovie {}

    impl HasMovieRepository for UpdateMovie {
        fn movie_repository(&self) -> Arc<dyn MovieRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl UpdateMovie for UpdateMovie {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasUpdateMovie {
    fn update_movie(&self) -> Arc<dyn UpdateMovie + Send + Sync>;
}
