// All nom parsers split among files for organisation
mod line;
mod number;

// Internal re-exports for convenience
pub(crate) use line::*;
pub(crate) use number::*;
