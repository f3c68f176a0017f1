pub mod container_list;
