mod component;
mod config;
mod error;
mod geometry;
mod layout;
mod render;
mod state;
mod surface;
mod types;

pub use component::DigraphCanvas;
pub use config::{BUNDLED_CONFIG, GraphConfig};
pub use state::DigraphState;
