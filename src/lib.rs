pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod telemetry;
pub mod usecases;

use anyhow::Result;
use std::sync::Arc;
use tracing::error;

use crate::config::Config;
use crate::errors::{DocklsResult, HasErrorCode};
use crate::repositories::docker_client::DockerClient;
use crate::telemetry::initialize_telemetry_with_configuration;
use crate::usecases::container_list::ContainerListUsecase;

/// Entry point of the binary: built-in configuration, one listing, stdout.
pub async fn start() -> Result<()> {
    let config = Config::default();
    let _telemetry = initialize_telemetry_with_configuration(&config.telemetry)?;

    if let Err(err) = run(&config).await {
        error!(code = err.error_code(), "{}", err);
        return Err(err.into());
    }

    Ok(())
}

pub async fn run(config: &Config) -> DocklsResult<()> {
    let docker_client = Arc::new(DockerClient::new(&config.docker)?);
    let usecase = ContainerListUsecase::new(docker_client);

    usecase.print_containers(&mut std::io::stdout()).await
}
