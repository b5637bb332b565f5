use crate::{Grid, Layer, ResultSet};

/// Read-only view of the fields every parsed record shares
///
/// Downstream consumers (plotting, report generation) only need the grid
/// geometry, the layer stack, and the result arrays, regardless of which
/// on-disk format produced the record. Records are populated by exactly one
/// reader call and treated as immutable afterwards.
pub trait SimulationRecord {
    /// Grid geometry and derived coordinate sequences
    fn grid(&self) -> &Grid;

    /// Layer stack in input order
    fn layers(&self) -> &[Layer];

    /// Energy balance scalars and distribution arrays
    fn results(&self) -> &ResultSet;

    /// Number of layers in the stack
    fn num_layers(&self) -> usize {
        self.layers().len()
    }
}
