pub mod transform_image;

pub use transform_image::*;
