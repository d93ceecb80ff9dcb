use std::sync::Arc;

use domain::{aggregate::Movie, value_object::MovieId};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait MovieRepository {
    // delete-by-key is idempotent: deleting an absent key is not an error
    async fn delete(&self, id: MovieId) -> Result<(), Error>;
    // put replaces any existing record with the same key
    async fn put(&self, movie: &Movie) -> Result<(), Error>;
}

pub trait HasMovieRepository {
    fn movie_repository(&self) -> Arc<dyn MovieRepository + Send + Sync>;
}
