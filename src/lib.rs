//! Number formatting helpers for viewers: SI magnitude prefixes, frequency / wavelength
//! conversion, and digit grouping

// Binary dependencies
use clap as _;
use env_logger as _;

pub mod config;
pub mod fmt;
pub mod wave;
