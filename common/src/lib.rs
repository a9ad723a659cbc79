// native-side support for the folio tools
//
// the cycler crate stays runtime-agnostic so that it can be compiled for the browser; this is
// where the tokio-specific pieces live, along with config file handling
pub mod config;
pub mod timer;

pub use timer::{CyclerTask, TokioTimer, spawn_cycler};
