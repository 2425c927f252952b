//! Public types for the Premise API.

mod example;
mod feature;
mod label;

pub use example::Example;
pub use feature::{EncodedFeature, LabelId};
pub use label::LabelSet;
