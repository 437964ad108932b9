pub mod dto;
pub mod error;
pub mod usecase;
pub mod validate;

pub use dto::*;
pub use error::ApplicationError;
pub use usecase::*;
pub use validate::validate_params;
