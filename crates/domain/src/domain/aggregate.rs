pub mod movie;

pub use self::movie::Movie;
