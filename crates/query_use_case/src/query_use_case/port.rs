pub mod movie_reader;

#[cfg(any(test, feature = "test-util"))]
pub use self::movie_reader::MockMovieReader;
pub use self::movie_reader::{HasMovieReader, MovieQueryData, MovieReader};
