use itertools::Itertools;
use rayon::prelude::*;

use super::{Error, MappingStage, RangeInterval, Result};

/// The chain of stages taking a seed all the way to its location.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<MappingStage>,
}

impl Pipeline {
    pub fn new(stages: impl IntoIterator<Item = MappingStage>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    #[inline]
    pub fn stages(&self) -> &[MappingStage] {
        &self.stages
    }

    pub fn map_value(&self, value: i64) -> i64 {
        self.stages
            .iter()
            .fold(value, |value, stage| stage.map_value(value))
    }

    /// Runs a set of disjoint ranges through every stage. The result is
    /// sorted by start.
    pub fn map_ranges(&self, ranges: &[RangeInterval]) -> Vec<RangeInterval> {
        let mut initial = ranges.to_vec();
        initial.sort_unstable();

        self.stages.iter().fold(initial, |ranges, stage| {
            let mut mapped = stage.par_map_ranges(&ranges);
            mapped.sort_unstable();
            crate::debugln!("{stage}: {}", mapped.iter().join(", "));
            mapped
        })
    }

    /// The lowest value any of `seeds` ends up at.
    pub fn lowest_value(&self, seeds: &[i64]) -> Result<i64> {
        seeds
            .par_iter()
            .map(|&seed| self.map_value(seed))
            .min()
            .ok_or(Error::NoCandidates)
    }

    /// The lowest value any of the values in `ranges` ends up at.
    pub fn lowest_start(&self, ranges: &[RangeInterval]) -> Result<i64> {
        self.map_ranges(ranges)
            .iter()
            .map(RangeInterval::start)
            .min()
            .ok_or(Error::NoCandidates)
    }
}

impl FromIterator<MappingStage> for Pipeline {
    fn from_iter<I: IntoIterator<Item = MappingStage>>(iter: I) -> Self {
        Self::new(iter)
    }
}
