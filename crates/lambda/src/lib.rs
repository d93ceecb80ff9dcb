pub mod lambda;

pub use self::lambda::*;
