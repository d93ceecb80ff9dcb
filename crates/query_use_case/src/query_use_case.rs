pub mod get_movie;
pub mod list_movies;
pub mod port;
