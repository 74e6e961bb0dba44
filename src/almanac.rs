//! Remapping of inclusive integer ranges through chains of offset maps.
//!
//! Each [`MappingStage`] is a piecewise translation: values inside one of its
//! ranges are shifted by that range's offset, everything else passes through
//! unchanged. A [`Pipeline`] applies stages one after another, either to
//! single values or to whole sets of disjoint [`RangeInterval`]s.

mod interval;
mod pipeline;
mod stage;

pub use interval::{seed_ranges, RangeInterval};
pub use pipeline::Pipeline;
pub use stage::MappingStage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("range starting at {start} has non-positive length {length}")]
    EmptyRange { start: i64, length: i64 },
    #[error("range start {start} is past its end {end}")]
    Inverted { start: i64, end: i64 },
    #[error("range arithmetic overflowed")]
    Overflow,
    #[error("seed value {0} has no length paired with it")]
    UnpairedSeed(i64),
    #[error("no candidate values to take the minimum of")]
    NoCandidates,
}
