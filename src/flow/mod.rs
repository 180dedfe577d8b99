pub mod conversion;
pub mod definition;
pub mod validate;

pub use conversion::*;
pub use definition::*;
