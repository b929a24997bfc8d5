pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::StdoutSink;
pub use core::{builder::RecordBuilder, engine::Engine};
pub use domain::model::{Confirmed, Experience, ListNode, Placement, Record};
pub use utils::error::{ProfileError, Result};
