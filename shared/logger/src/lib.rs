//! Leveled logging for the room-creation frontend.
//!
//! Records go either to a file, through a dedicated writer thread, or to an
//! in-memory buffer that tests can inspect.

pub mod error;
mod level;
mod logger;
mod record;
mod writer;

pub use error::{LoggingError, Result};
pub use level::LogLevel;
pub use logger::{LogBuffer, Logger};
