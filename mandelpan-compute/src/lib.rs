pub mod config;
pub mod engine;
pub mod palette;

pub use config::EngineConfig;
pub use engine::FractalEngine;
pub use palette::{Palette, PALETTE_SIZE};

// Re-export core types for convenience
pub use mandelpan_core::*;
