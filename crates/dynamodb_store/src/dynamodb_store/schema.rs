// Attribute names of the movies table. The table is keyed on the numeric
// `id` attribute alone.
pub(crate) const ID: &str = "id";
pub(crate) const OVERVIEW: &str = "overview";
pub(crate) const RELEASE_DATE: &str = "release_date";
pub(crate) const TITLE: &str = "title";
