//! Single-row thumbnail layout: mode, configuration, frames and the solver itself.

pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod frame;
pub(crate) mod mode;
