// Record types split among files for organisation
mod media;
mod record;

pub use media::{Media, Medium};
pub use record::{Format, Mco, McoV1, McoV2, Source};
