use std::sync::Arc;

use dynamodb_store::DynamoDbMovieStore;
use lambda::{handler, App, Config};
use lambda_http::{run, service_fn};
use tracing::Level;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .with(
            Targets::new()
                .with_target("lambda", Level::INFO)
                .with_target("dynamodb_store", Level::INFO),
        )
        .init();
    let config = Config::from_env()?;
    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region))
        .load()
        .await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);
    let store = Arc::new(DynamoDbMovieStore::new(client, config.table_name));
    let app = App::new(store.clone(), store);
    run(service_fn(|event| {
        handler::update_movie::handler(&app, event)
    }))
    .await
}
