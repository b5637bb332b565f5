//! Module for reading MCSub simulator output files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod mcsub;
mod parsers;
mod reader;

// Inline anything important for a nice public API
#[doc(inline)]
pub use mcsub::{Beam, McSub};

#[doc(inline)]
pub use reader::{read_mcsub_file, read_mcsub_text};

#[doc(inline)]
pub use error::{Error, Result};
