mod in_memory_movie_store;

pub use self::in_memory_movie_store::*;
