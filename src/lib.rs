//! `ltools` is a semi-modular toolkit of libraries for Monte-Carlo
//! light-transport analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ltools_core as core;

#[cfg(feature = "mco")]
#[cfg_attr(docsrs, doc(cfg(feature = "mco")))]
#[doc(inline)]
pub use ltools_mco as mco;

#[cfg(feature = "mcsub")]
#[cfg_attr(docsrs, doc(cfg(feature = "mcsub")))]
#[doc(inline)]
pub use ltools_mcsub as mcsub;
