use std::fmt;

use rayon::prelude::*;
use smallvec::SmallVec;

use super::RangeInterval;

/// The pieces a single input range is split into by one stage. Almost always
/// just a handful.
pub type Pieces = SmallVec<[RangeInterval; 4]>;

/// One `input-to-output` map of the almanac.
///
/// The mapping ranges are kept sorted by start. They are expected to be
/// disjoint; if they are not, the earliest-starting range wins wherever two
/// of them overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingStage {
    input_label: String,
    output_label: String,
    ranges: Vec<RangeInterval>,
}

impl MappingStage {
    pub fn new(
        input_label: impl Into<String>,
        output_label: impl Into<String>,
        ranges: impl IntoIterator<Item = RangeInterval>,
    ) -> Self {
        let mut ranges: Vec<RangeInterval> = ranges.into_iter().collect();
        ranges.sort_unstable();
        Self {
            input_label: input_label.into(),
            output_label: output_label.into(),
            ranges,
        }
    }

    #[inline]
    pub fn input_label(&self) -> &str {
        &self.input_label
    }

    #[inline]
    pub fn output_label(&self) -> &str {
        &self.output_label
    }

    #[inline]
    pub fn ranges(&self) -> &[RangeInterval] {
        &self.ranges
    }

    /// Maps a single value through the stage. Values outside every mapping
    /// range come back unchanged.
    pub fn map_value(&self, value: i64) -> i64 {
        match self.ranges.iter().find(|range| range.contains(value)) {
            Some(range) => value + range.offset(),
            None => value,
        }
    }

    /// Splits `input` against the mapping ranges.
    ///
    /// Every value of `input` ends up in exactly one piece: pieces covered by
    /// a mapping range are shifted by its offset (and tagged with it), the
    /// rest pass through with offset zero. Pieces come out in ascending order
    /// of the source values they cover.
    pub fn partition(&self, input: &RangeInterval) -> Pieces {
        let mut pieces = Pieces::new();
        let mut cursor = input.start();

        for mapping in &self.ranges {
            if mapping.start() > input.end() {
                break;
            }
            if mapping.end() < cursor {
                continue;
            }

            if cursor < mapping.start() {
                pieces.push(RangeInterval::from_parts(cursor, mapping.start() - 1, 0));
                cursor = mapping.start();
            }

            let overlap_end = input.end().min(mapping.end());
            let offset = mapping.offset();
            pieces.push(RangeInterval::from_parts(
                cursor + offset,
                overlap_end + offset,
                offset,
            ));

            if overlap_end == input.end() {
                return pieces;
            }
            cursor = overlap_end + 1;
        }

        pieces.push(RangeInterval::from_parts(cursor, input.end(), 0));
        pieces
    }

    /// Maps every input range through the stage. The output keeps input
    /// order, with each input's pieces in ascending source order; it is not
    /// sorted by start.
    pub fn map_ranges(&self, inputs: &[RangeInterval]) -> Vec<RangeInterval> {
        inputs
            .iter()
            .flat_map(|input| self.partition(input))
            .collect()
    }

    /// Same as [`map_ranges`](Self::map_ranges), with the inputs split across
    /// threads.
    pub fn par_map_ranges(&self, inputs: &[RangeInterval]) -> Vec<RangeInterval> {
        inputs
            .par_iter()
            .flat_map_iter(|input| self.partition(input))
            .collect()
    }
}

impl fmt::Display for MappingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-to-{} ({} ranges)",
            self.input_label,
            self.output_label,
            self.ranges.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: i64, end: i64, offset: i64) -> RangeInterval {
        RangeInterval::new(start, end, offset).unwrap()
    }

    fn stage(ranges: impl IntoIterator<Item = RangeInterval>) -> MappingStage {
        MappingStage::new("foo", "bar", ranges)
    }

    /// `[7, 10] +50` followed directly by `[11, 53] -11`.
    fn two_range_stage() -> MappingStage {
        stage([range(7, 10, 50), range(11, 53, -11)])
    }

    #[track_caller]
    fn do_test(stage: &MappingStage, input: RangeInterval, expected: &[RangeInterval]) {
        let actual = stage.map_ranges(&[input]);
        assert_eq!(actual, expected);
    }

    /// Checks that the pieces' source spans tile `input` exactly, in order.
    #[track_caller]
    fn assert_partitions(input: &RangeInterval, pieces: &[RangeInterval]) {
        let mut next = input.start();
        for piece in pieces {
            assert_eq!(piece.source_start(), next, "gap or overlap at {piece}");
            next = piece.source_end() + 1;
        }
        assert_eq!(next, input.end() + 1, "pieces do not reach end of {input}");
    }

    #[test]
    fn fits_within_single_range() {
        let stage = stage([range(10, 20, 3)]);
        do_test(&stage, range(12, 15, 5), &[range(15, 18, 3)]);
    }

    #[test]
    fn spans_two_ranges() {
        do_test(
            &two_range_stage(),
            range(9, 25, 0),
            &[range(59, 60, 50), range(0, 14, -11)],
        );
    }

    #[test]
    fn starts_before_any_range() {
        do_test(
            &two_range_stage(),
            range(2, 25, 0),
            &[range(2, 6, 0), range(57, 60, 50), range(0, 14, -11)],
        );
    }

    #[test]
    fn ends_after_last_range() {
        do_test(
            &two_range_stage(),
            range(9, 60, 0),
            &[range(59, 60, 50), range(0, 42, -11), range(54, 60, 0)],
        );
    }

    #[test]
    fn gap_between_ranges() {
        let stage = stage([range(0, 4, 100), range(10, 14, 200)]);
        do_test(
            &stage,
            range(3, 11, 0),
            &[range(103, 104, 100), range(5, 9, 0), range(210, 211, 200)],
        );
    }

    #[test]
    fn misses_every_range() {
        let stage = stage([range(0, 4, 100), range(10, 14, 200)]);
        do_test(&stage, range(5, 9, 0), &[range(5, 9, 0)]);
        do_test(&stage, range(20, 30, 0), &[range(20, 30, 0)]);
    }

    #[test]
    fn shared_boundary_goes_to_first_range() {
        let stage = stage([range(7, 11, 50), range(11, 53, -11)]);
        let input = range(9, 25, 0);
        let pieces = stage.map_ranges(&[input]);
        assert_eq!(pieces, [range(59, 61, 50), range(1, 14, -11)]);
        assert_partitions(&input, &pieces);
        assert_eq!(stage.map_value(11), 61);

        let input = range(2, 25, 0);
        let pieces = stage.map_ranges(&[input]);
        assert_eq!(
            pieces,
            [range(2, 6, 0), range(57, 61, 50), range(1, 14, -11)]
        );
        assert_partitions(&input, &pieces);

        let input = range(9, 60, 0);
        let pieces = stage.map_ranges(&[input]);
        assert_eq!(
            pieces,
            [range(59, 61, 50), range(1, 42, -11), range(54, 60, 0)]
        );
        assert_partitions(&input, &pieces);
    }

    #[test]
    fn unsorted_ranges_are_sorted() {
        let stage = stage([range(11, 53, -11), range(7, 10, 50)]);
        assert_eq!(stage, two_range_stage());
    }

    #[test]
    fn map_value() {
        let stage = stage([RangeInterval::from_mapping(0, 6, 42).unwrap()]);
        assert_eq!(stage.map_value(50), 50);
        assert_eq!(stage.map_value(6), 0);
        assert_eq!(stage.map_value(47), 41);
        assert_eq!(stage.map_value(48), 48);
        assert_eq!(stage.map_value(-1), -1);
    }

    #[test]
    fn empty_stage_is_identity() {
        let stage = stage([]);
        for value in [-5, 0, 7, i64::MAX] {
            assert_eq!(stage.map_value(value), value);
        }
        let inputs = [range(i64::MIN, -1, 0), range(3, 9, 0), range(20, 20, 0)];
        assert_eq!(stage.map_ranges(&inputs), inputs);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(two_range_stage().map_ranges(&[]).is_empty());
        assert!(two_range_stage().par_map_ranges(&[]).is_empty());
    }

    #[test]
    fn partition_property() {
        let stages = [
            two_range_stage(),
            stage([range(0, 4, 100), range(10, 14, 200)]),
            stage([range(0, 0, 1), range(1, 1, -1), range(5, 30, 7)]),
            stage([range(7, 11, 50), range(11, 53, -11), range(12, 13, 4)]),
        ];
        for stage in &stages {
            for start in -2..=60 {
                for end in start..=60 {
                    let input = range(start, end, 0);
                    assert_partitions(&input, &stage.map_ranges(&[input]));
                }
            }
        }
    }

    #[test]
    fn scalar_and_batch_agree() {
        let stage = stage([range(0, 4, 100), range(10, 14, 200), range(15, 40, -15)]);
        for value in -5..=45 {
            let pieces = stage.map_ranges(&[range(value, value, 0)]);
            assert_eq!(pieces.len(), 1);
            assert_eq!(pieces[0].start(), stage.map_value(value));
            assert_eq!(pieces[0].start() - pieces[0].offset(), value);
        }
    }

    #[test]
    fn sorting_input_does_not_change_result_set() {
        let stage = two_range_stage();
        let inputs = [range(40, 70, 0), range(0, 8, 0), range(20, 30, 0)];
        let mut sorted_inputs = inputs;
        sorted_inputs.sort();

        let mut a = stage.map_ranges(&inputs);
        let mut b = stage.map_ranges(&sorted_inputs);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn parallel_matches_sequential() {
        let stage = stage([range(0, 4, 100), range(10, 14, 200), range(15, 40, -15)]);
        let inputs: Vec<_> = (0..50).map(|i| range(i * 3, i * 3 + 2, 0)).collect();
        assert_eq!(stage.par_map_ranges(&inputs), stage.map_ranges(&inputs));
    }

    #[test]
    fn outputs_stay_disjoint() {
        // [0, 9] -> [10, 19], [10, 19] -> [0, 9]: a swap.
        let stage = stage([range(0, 9, 10), range(10, 19, -10)]);
        let mut out = stage.map_ranges(&[range(5, 14, 0), range(30, 35, 0)]);
        out.sort();
        assert_eq!(out, [range(0, 4, -10), range(15, 19, 10), range(30, 35, 0)]);
        assert!(out.windows(2).all(|w| w[0].end() < w[1].start()));
    }
}
