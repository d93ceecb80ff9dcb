use std::sync::Arc;

use domain::value_object::{MovieId, ReleaseDate};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovieQueryData {
    pub id: MovieId,
    pub overview: String,
    pub release_date: ReleaseDate,
    pub title: String,
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait MovieReader {
    async fn get(&self, id: MovieId) -> Result<Option<MovieQueryData>, Error>;
    async fn list(&self) -> Result<Vec<MovieQueryData>, Error>;
}

pub trait HasMovieReader {
    fn movie_reader(&self) -> Arc<dyn MovieReader + Send + Sync>;
}
