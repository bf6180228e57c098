pub mod scene;
pub mod shape_configuration;
