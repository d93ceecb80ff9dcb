use std::{collections::BTreeMap, sync::Arc};

use domain::{aggregate::Movie, value_object::MovieId};
use tokio::sync::Mutex;

pub struct InMemoryMovieStore {
    movies: Arc<Mutex<BTreeMap<MovieId, Movie>>>,
}

impl InMemoryMovieStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            movies: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

fn movie_query_data(movie: &Movie) -> query_use_case::port::MovieQueryData {
    query_use_case::port::MovieQueryData {
        id: movie.id(),
        overview: movie.overview().to_owned(),
        release_date: movie.release_date(),
        title: movie.title().to_owned(),
    }
}

#[async_trait::async_trait]
impl query_use_case::port::MovieReader for InMemoryMovieStore {
    async fn get(
        &self,
        id: MovieId,
    ) -> Result<Option<query_use_case::port::MovieQueryData>, query_use_case::port::movie_reader::Error>
    {
        let movies = self.movies.lock().await;
        Ok(movies.get(&id).map(movie_query_data))
    }

    async fn list(
        &self,
    ) -> Result<Vec<query_use_case::port::MovieQueryData>, query_use_case::port::movie_reader::Error>
    {
        let movies = self.movies.lock().await;
        Ok(movies.values().map(movie_query_data).collect())
    }
}

#[async_trait::async_trait]
impl command_use_case::port::MovieRepository for InMemoryMovieStore {
    async fn delete(
        &self,
        id: MovieId,
    ) -> Result<(), command_use_case::port::movie_repository::Error> {
        let mut movies = self.movies.lock().await;
        // Removing an absent key is not an error: delete-by-key is idempotent.
        movies.remove(&id);
        Ok(())
    }

    async fn put(
        &self,
        movie: &Movie,
    ) -> Result<(), command_use_case::port::movie_repository::Error> {
        let mut movies = self.movies.lock().await;
        movies.insert(movie.id(), movie.clone());
        Ok(())
    }
}
