pub mod movie_repository;

#[cfg(any(test, feature = "test-util"))]
pub use self::movie_repository::MockMovieRepository;
pub use self::movie_repository::{HasMovieRepository, MovieRepository};
