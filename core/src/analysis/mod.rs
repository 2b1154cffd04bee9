pub use deduce::*;
pub use snapshot::*;

mod deduce;
mod snapshot;
