use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::models::ContainerSummary;
use bollard::Docker;
use tracing::{debug, info};

use crate::config::DockerConfig;
use crate::errors::docker::{error_chain, DockerError};
use crate::models::container_client::ContainerRecord;
use crate::repositories::container_client::ContainerClient;

/// Engine client authenticating with a client certificate over TLS.
#[derive(Debug, Clone)]
pub struct DockerClient {
    docker: Docker,
    endpoint: String,
}

impl DockerClient {
    /// Loads the CA bundle and client key pair and prepares the TLS client.
    /// No connection is made until the first request.
    pub fn new(config: &DockerConfig) -> Result<DockerClient, DockerError> {
        info!(endpoint = %config.endpoint, "Creating Docker client");
        debug!(
            ca = %config.ca_cert_path.display(),
            cert = %config.client_cert_path.display(),
            key = %config.client_key_path.display(),
            "Loading TLS material"
        );

        let docker = Docker::connect_with_ssl(
            &config.endpoint,
            &config.client_key_path,
            &config.client_cert_path,
            &config.ca_cert_path,
            config.timeout_secs,
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| DockerError::Tls {
            endpoint: config.endpoint.clone(),
            reason: error_chain(&e),
        })?;

        Ok(Self {
            docker,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ContainerClient for DockerClient {
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, DockerError> {
        info!(endpoint = %self.endpoint, "Listing containers");
        let options = Some(ListContainersOptions::<String> {
            all: true,
            ..Default::default()
        });

        let summaries = self
            .docker
            .list_containers(options)
            .await
            .map_err(|e| DockerError::from_request(&self.endpoint, e))?;
        debug!(count = summaries.len(), "Received container summaries");

        into_records(&self.endpoint, summaries)
    }
}

fn into_records(
    endpoint: &str,
    summaries: Vec<ContainerSummary>,
) -> Result<Vec<ContainerRecord>, DockerError> {
    summaries
        .into_iter()
        .enumerate()
        .map(|(index, summary)| {
            ContainerRecord::try_from(summary).map_err(|e| DockerError::Decode {
                endpoint: endpoint.to_string(),
                reason: format!("container #{}: {}", index, e),
            })
        })
        .collect()
}
