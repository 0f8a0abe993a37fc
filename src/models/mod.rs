pub mod gemini;
pub mod image;
pub mod styles;

pub use gemini::{first_image, ResponsePart};
pub use image::*;
pub use styles::*;
