mod color;
mod component;
mod config;
mod integrate;
mod particles;
mod render;
mod scheduler;
mod state;
mod topology;
mod types;

pub use component::NetworkBackground;
