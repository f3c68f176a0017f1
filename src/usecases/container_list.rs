use std::io::Write;
use std::sync::Arc;

use tracing::info;

use crate::errors::render::RenderError;
use crate::errors::DocklsResult;
use crate::models::container_client::ContainerRecord;
use crate::repositories::container_client::ContainerClient;

#[derive(Debug, Clone)]
pub struct ContainerListUsecase<C>
where
    C: ContainerClient,
{
    pub container_client: Arc<C>,
}

impl<C> ContainerListUsecase<C>
where
    C: ContainerClient,
{
    pub fn new(container_client: Arc<C>) -> Self {
        Self { container_client }
    }

    pub async fn list_containers(&self) -> DocklsResult<Vec<ContainerRecord>> {
        let containers = self.container_client.list_containers().await?;
        info!(count = containers.len(), "Fetched container list");
        Ok(containers)
    }

    /// Fetches the list and writes one line per container to `out`.
    pub async fn print_containers<W: Write>(&self, out: &mut W) -> DocklsResult<()> {
        let containers = self.list_containers().await?;
        render_containers(&containers, out)?;
        Ok(())
    }
}

pub fn render_containers<W: Write>(
    containers: &[ContainerRecord],
    out: &mut W,
) -> Result<(), RenderError> {
    for container in containers {
        writeln!(out, "{}", format_container_line(container))?;
    }
    out.flush()?;
    Ok(())
}

// The trailing `]` has always been part of this line; scripts may match on it.
pub fn format_container_line(container: &ContainerRecord) -> String {
    format!(
        "Container {} ({}, {})]",
        container.name, container.id, container.status
    )
}
