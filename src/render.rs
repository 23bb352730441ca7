pub mod composite;
pub mod overlay;
pub mod pipeline;
