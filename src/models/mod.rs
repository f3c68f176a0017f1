pub mod container_client;
