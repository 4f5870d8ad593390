pub mod bounds;
pub mod error;
pub mod pixel_buffer;
pub mod rescale;
pub mod transform;

pub use bounds::PlaneBounds;
pub use error::FractalError;
pub use pixel_buffer::{PixelBuffer, Rgb};
pub use rescale::rescale;
pub use transform::ViewportTransform;
