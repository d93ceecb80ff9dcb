pub mod domain;

pub use self::domain::*;
