#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! In-memory message logger with optional file output.
//!
//! A [`Logger`] keeps every accepted entry in memory, in order. File output is
//! opt-in and best-effort:
//!
//! - **Immediate mode**: each entry is appended to the log file as it is logged.
//! - **Write on drop**: all entries are written once when the logger is torn down.
//! - **Explicit dumps**: [`Logger::write`] to any `io::Write`, or
//!   [`Logger::write_to_file`] with a per-call append/truncate choice.
//!
//! ```no_run
//! use memlog_core::Logger;
//!
//! let mut logger = Logger::new();
//! logger.log("A simple string");
//! logger.log(1024);
//! logger.log_tagged("A tag with integer:", 26);
//! logger.log_tagged("A tag with double:", 20.5);
//! logger.write_to_file("simple.txt", false);
//! ```

pub mod builder;
pub mod conversions;
pub mod error;
pub mod logger;
pub mod mode;

pub use builder::LoggerBuilder;
pub use error::{LogError, Result};
pub use logger::Logger;
pub use mode::OpenMode;
