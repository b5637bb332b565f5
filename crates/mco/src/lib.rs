//! Module for reading MCML `.mco` result files
//!
//! The `.mco` file holds the results of one multi-layer Monte-Carlo
//! light-transport run as line-oriented text: layer optical properties,
//! grid geometry, an energy balance, and labelled distribution blocks.
//! Two layouts exist, identified by the magic marker in the leading bytes:
//!
//! | Format | Magic        | Layout                                          |
//! | ------ | ------------ | ----------------------------------------------- |
//! | [Format::V1] | `A1`         | explicit layer count, markers appear once |
//! | [Format::V2] | `mcmloA2.0`  | named media, markers echoed before results |
//!
//! The V2 file reproduces its own input specification ahead of the results,
//! so every distribution marker occurs twice and the reader lands on the
//! second occurrence.
//!
//! All stored values are unit-normalized to mm-based units; distribution
//! blocks whose marker is absent simply leave the corresponding array
//! empty.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use ltools_mco::Mco;
//! # use ltools_core::SimulationRecord;
//! // Variant is detected from the leading bytes
//! let record = Mco::from_file("/path/to/sample.mco").unwrap();
//!
//! println!("{} layers, dr = {} mm", record.num_layers(), record.grid().dr);
//! ```

mod error;
mod model;
mod parsers;
mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use model::*;
