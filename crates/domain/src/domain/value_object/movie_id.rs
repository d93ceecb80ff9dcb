#[derive(Debug, thiserror::Error)]
#[error("invalid movie id")]
pub struct Error;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MovieId(i64);

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MovieId> for i64 {
    fn from(movie_id: MovieId) -> Self {
        movie_id.0
    }
}

impl std::str::FromStr for MovieId {
    type Err = Error;

    // Leading-numeric-prefix parsing: an optional sign followed by digits,
    // ignoring any trailing non-digit characters ("42abc" parses as 42).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1_i64, rest),
            None => (1_i64, s.strip_prefix('+').unwrap_or(s)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        let digits = &digits[..end];
        if digits.is_empty() {
            return Err(Error);
        }
        let value = digits.parse::<i64>().map_err(|_| Error)?;
        Ok(Self(sign * value))
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
