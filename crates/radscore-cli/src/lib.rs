//! Library side of the `radscore` command-line tool.

pub mod input;
pub mod logging;
pub mod summary;
