pub mod builder;
pub mod engine;

pub use crate::domain::model::Record;
pub use crate::domain::ports::{Sink, Source};
pub use crate::utils::error::Result;
