use async_trait::async_trait;
use mockall::automock;

use crate::errors::docker::DockerError;
use crate::models::container_client::ContainerRecord;

#[automock]
#[async_trait]
pub trait ContainerClient: Send + Sync {
    /// Every container the engine knows about, running or stopped, in API order.
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, DockerError>;
}
