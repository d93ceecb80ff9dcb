use std::{collections::HashMap, str::FromStr as _};

use aws_sdk_dynamodb::types::AttributeValue;
use domain::{
    aggregate::Movie,
    value_object::{MovieId, ReleaseDate},
};

use crate::schema;

pub(crate) fn key_from_movie_id(id: MovieId) -> AttributeValue {
    AttributeValue::N(id.to_string())
}

pub(crate) fn item_from_movie(movie: &Movie) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            schema::ID.to_owned(),
            AttributeValue::N(movie.id().to_string()),
        ),
        (
            schema::OVERVIEW.to_owned(),
            AttributeValue::S(movie.overview().to_owned()),
        ),
        (
            schema::RELEASE_DATE.to_owned(),
            AttributeValue::S(movie.release_date().to_string()),
        ),
        (
            schema::TITLE.to_owned(),
            AttributeValue::S(movie.title().to_owned()),
        ),
    ])
}

pub(crate) fn movie_query_data_from_item(
    item: &HashMap<String, AttributeValue>,
) -> Result<query_use_case::port::MovieQueryData, Box<dyn std::error::Error + Send + Sync>> {
    Ok(query_use_case::port::MovieQueryData {
        id: MovieId::from_str(number_attribute(item, schema::ID)?)?,
        overview: string_attribute(item, schema::OVERVIEW)?.to_owned(),
        release_date: ReleaseDate::from_str(string_attribute(item, schema::RELEASE_DATE)?)?,
        title: string_attribute(item, schema::TITLE)?.to_owned(),
    })
}

fn number_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, Box<dyn std::error::Error + Send + Sync>> {
    attribute(item, name)?
        .as_n()
        .map(String::as_str)
        .map_err(|_| format!("{name} attribute is not a number").into())
}

fn string_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, Box<dyn std::error::Error + Send + Sync>> {
    attribute(item, name)?
        .as_s()
        .map(String::as_str)
        .map_err(|_| format!("{name} attribute is not a string").into())
}

fn attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a AttributeValue, Box<dyn std::error::Error + Send + Sync>> {
    item.get(name)
        .ok_or_else(|| format!("{name} attribute not found").into())
}
