use std::sync::Arc;

use command_use_case::port::MovieRepository;
use query_use_case::port::MovieReader;

#[derive(Clone)]
pub struct App {
    movie_reader: Arc<dyn MovieReader + Send + Sync>,
    movie_repository: Arc<dyn MovieRepository + Send + Sync>,
}

impl App {
    pub fn new(
        movie_reader: Arc<dyn MovieReader + Send + Sync>,
        movie_repository: Arc<dyn MovieRepository + Send + Sync>,
    ) -> Self {
        Self {
            movie_reader,
            movie_repository,
        }
    }
}

impl command_use_case::create_movie::CreateMovie for App {}

impl command_use_case::create_movie::HasCreateMovie for App {
    fn create_movie(&self) -> Arc<dyn command_use_case::create_movie::CreateMovie + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::delete_movie::DeleteMovie for App {}

impl command_use_case::delete_movie::HasDeleteMovie for App {
    fn delete_movie(&self) -> Arc<dyn command_use_case::delete_movie::DeleteMovie + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::port::HasMovieRepository for App {
    fn movie_repository(&self) -> Arc<dyn MovieRepository + Send + Sync> {
        self.movie_repository.clone()
    }
}

impl command_use_case::update_movie::HasUpdateMovie for App {
    fn update_movie(&self) -> Arc<dyn command_use_case::update_movie::UpdateMovie + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::update_movie::UpdateMovie for App {}

impl query_use_case::port::HasMovieReader for App {
    fn movie_reader(&self) -> Arc<dyn MovieReader + Send + Sync> {
        self.movie_reader.clone()
    }
}

impl query_use_case::get_movie::GetMovie for App {}

impl query_use_case::get_movie::HasGetMovie for App {
    fn get_movie(&self) -> Arc<dyn query_use_case::get_movie::GetMovie + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl query_use_case::list_movies::HasListMovies for App {
    fn list_movies(&self) -> Arc<dyn query_use_case::list_movies::ListMovies + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl query_use_case::list_movies::ListMovies for App {}
