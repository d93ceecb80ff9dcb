pub mod movie_id;
pub mod release_date;

pub use self::movie_id::MovieId;
pub use self::release_date::ReleaseDate;
