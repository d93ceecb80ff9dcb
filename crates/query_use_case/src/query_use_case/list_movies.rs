use std::sync::Arc;

use crate::port::{HasMovieReader, MovieQueryData};
#[cfg(any(test, feature = "test-util"))]
use crate::port::MovieReader;

pub struct Input;

pub struct Output(pub Vec<Movie>);

#[derive(Clone)]
pub struct Movie {
    pub id: String,
    pub overview: String,
    pub release_date: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("movie list")]
    MovieList(#[source] crate::port::movie_reader::Error),
}

#[async_trait::async_trait]
pub trait ListMovies: HasMovieReader {
    async fn execute(&self, _: Input) -> Result<Output, Error> {
        let movie_reader = self.movie_reader();
        movie_reader
            .list()
            .await
            .map(|movies| {
                Output(
                    movies
                        .into_iter()
                        .map(
                            |MovieQueryData {
                                 id,
                                 overview,
                                 release_date,
                                 title,
                             }| Movie {
                                id: id.to_string(),
                                overview,
                                release_date: release_date.to_string(),
                                title,
                            },
                        )
                        .collect(),
                )
            })
            .map_err(Error::MovieList)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ListMovies {}

    impl HasMovieReader for ListMovies {
        fn movie_reader(&self) -> Arc<dyn MovieReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl ListMovies for ListMovies {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasListMovies {
    fn list_movies(&self) -> Arc<dyn ListMovies + Send + Sync>;
}
