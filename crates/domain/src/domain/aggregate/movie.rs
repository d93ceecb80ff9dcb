use crate::value_object::{MovieId, ReleaseDate};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Movie {
    id: MovieId,
    overview: String,
    release_date: ReleaseDate,
    title: String,
}

impl Movie {
    pub fn new(id: MovieId, overview: String, release_date: ReleaseDate, title: String) -> Self {
        Self {
            id,
            overview,
            release_date,
            title,
        }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
