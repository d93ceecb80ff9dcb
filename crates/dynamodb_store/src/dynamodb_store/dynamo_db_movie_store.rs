use domain::{aggregate::Movie, value_object::MovieId};

use crate::{converter, schema};

pub struct DynamoDbMovieStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbMovieStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    async fn reader_get_impl(
        &self,
        id: MovieId,
    ) -> Result<
        Option<query_use_case::port::MovieQueryData>,
        Box<dyn std::error::Error + Send + Sync>,
    > {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(schema::ID, converter::key_from_movie_id(id))
            .send()
            .await?;
        output
            .item()
            .map(converter::movie_query_data_from_item)
            .transpose()
    }

    async fn reader_list_impl(
        &self,
    ) -> Result<Vec<query_use_case::port::MovieQueryData>, Box<dyn std::error::Error + Send + Sync>>
    {
        let mut all_movies = vec![];
        let mut exclusive_start_key = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;
            all_movies.extend(
                output
                    .items()
                    .iter()
                    .map(converter::movie_query_data_from_item)
                    .collect::<Result<Vec<_>, _>>()?,
            );
            exclusive_start_key = output.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        Ok(all_movies)
    }

    async fn repository_delete_impl(
        &self,
        id: MovieId,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(%id, table_name = %self.table_name, "deleting movie item");
        // DeleteItem applies unconditionally and acknowledges success whether
        // or not an item with this key existed.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(schema::ID, converter::key_from_movie_id(id))
            .send()
            .await?;
        Ok(())
    }

    async fn repository_put_impl(
        &self,
        movie: &Movie,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(id = %movie.id(), table_name = %self.table_name, "putting movie item");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(converter::item_from_movie(movie)))
            .send()
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl query_use_case::port::MovieReader for DynamoDbMovieStore {
    async fn get(
        &self,
        id: MovieId,
    ) -> Result<Option<query_use_case::port::MovieQueryData>, query_use_case::port::movie_reader::Error>
    {
        self.reader_get_impl(id)
            .await
            .map_err(query_use_case::port::movie_reader::Error::from)
    }

    async fn list(
        &self,
    ) -> Result<Vec<query_use_case::port::MovieQueryData>, query_use_case::port::movie_reader::Error>
    {
        self.reader_list_impl()
            .await
            .map_err(query_use_case::port::movie_reader::Error::from)
    }
}

#[async_trait::async_trait]
impl command_use_case::port::MovieRepository for DynamoDbMovieStore {
    async fn delete(
        &self,
        id: MovieId,
    ) -> Result<(), command_use_case::port::movie_repository::Error> {
        self.repository_delete_impl(id)
            .await
            .map_err(command_use_case::port::movie_repository::Error::from)
    }

    async fn put(
        &self,
        movie: &Movie,
    ) -> Result<(), command_use_case::port::movie_repository::Error> {
        self.repository_put_impl(movie)
            .await
            .map_err(command_use_case::port::movie_repository::Error::from)
    }
}
