//! Common record model and scanning primitives for light-transport output
//!
//! Every reader in the toolkit populates the same mm-based data model:
//!
//! | Type               | Description                                      |
//! | ------------------ | ------------------------------------------------ |
//! | [Layer]            | planar slab with fixed optical properties        |
//! | [Grid]             | axial/radial/angular/temporal bin geometry       |
//! | [ResultSet]        | energy balance scalars and distribution arrays   |
//! | [SimulationRecord] | read-only view shared by every parsed record     |
//!
//! The [Scanner] provides the low-level token reading the format grammars
//! are built on: a single-float lexer, fixed-count float blocks, comment
//! stripped line reading, and occurrence-based marker location. Files are
//! buffered whole because the marker locator rescans from the start of the
//! content; a forward-only stream cannot satisfy that contract.

mod error;
mod grid;
mod layer;
mod record;
mod resultset;
mod scan;
pub mod units;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use grid::Grid;

#[doc(inline)]
pub use layer::Layer;

#[doc(inline)]
pub use record::SimulationRecord;

#[doc(inline)]
pub use resultset::ResultSet;

#[doc(inline)]
pub use scan::Scanner;
