#![doc = include_str!("../puzzles/05.md")]

use advent_of_code_2023::{
    almanac::{self, seed_ranges, Pipeline},
    debugln,
    helpers::parse,
};

#[derive(Debug, Clone)]
struct Almanac {
    /// The numbers on the `seeds:` line, as written.
    pub seeds: Vec<i64>,
    pub pipeline: Pipeline,
}

impl Almanac {
    fn from_input(input: &str) -> Self {
        let almanac = parse::from_str(input.trim_end(), Almanac::parser())
            .expect("input should be valid")
            .expect("almanac ranges should be valid");

        debugln!("seeds: {:?}", almanac.seeds);
        for stage in almanac.pipeline.stages() {
            debugln!("{stage}");
        }

        almanac
    }
}

/// Returns the lowest location any of the listed seeds is planted at.
pub fn part_one(input: &str) -> Option<i64> {
    let almanac = Almanac::from_input(input);
    almanac.pipeline.lowest_value(&almanac.seeds).ok()
}

/// Returns the lowest location when the `seeds:` line lists `start length`
/// pairs of seed ranges.
pub fn part_two(input: &str) -> Option<i64> {
    let almanac = Almanac::from_input(input);
    let seeds = seed_ranges(&almanac.seeds).ok()?;
    let solution = almanac.pipeline.lowest_start(&seeds).ok();
    debugln!("Solution: {solution:?}");
    solution
}

fn main() {
    let folder = advent_of_code_2023::parse_args()
        .expect("arguments should be valid")
        .input_folder();
    let input = &advent_of_code_2023::read_file(folder, 5);
    advent_of_code_2023::solve!(1, part_one, input);
    advent_of_code_2023::solve!(2, part_two, input);
}


mod parsing {
    use super::*;

    use advent_of_code_2023::almanac::{MappingStage, RangeInterval};

    mod c {
        pub use combine::{
            parser::char::{self, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    fn number<Input>() -> impl Parser<Input, Output = i64>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        parse::decimal_integer::<i64, _>()
    }

    // "seeds: 79 14 55 13" -> [79, 14, 55, 13]
    fn seeds<Input>() -> impl Parser<Input, Output = Vec<i64>>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        (
            c::string("seeds: "),
            c::sep_by1::<Vec<_>, _, _, _>(number(), c::token(' ')),
        )
            .map(|(_, seeds)| seeds)
    }

    // "seed-to-soil map:" -> ("seed", "soil")
    fn header<Input>() -> impl Parser<Input, Output = (String, String)>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        let label = || c::many1::<String, _, _>(c::char::letter());

        (label(), c::string("-to-"), label(), c::string(" map:"))
            .map(|(input, _, output, _)| (input, output))
    }

    // "50 98 2" -> [98, 99] -48
    fn mapping_range<Input>() -> impl Parser<Input, Output = almanac::Result<RangeInterval>>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        let space = || c::token(' ');

        (number(), space(), number(), space(), number()).map(
            |(destination, _, source, _, length)| {
                RangeInterval::from_mapping(destination, source, length)
            },
        )
    }

    fn stage<Input>() -> impl Parser<Input, Output = almanac::Result<MappingStage>>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        let newline = || c::char::newline();

        let ranges = c::sep_end_by1::<Vec<_>, _, _, _>(mapping_range(), newline());

        (header(), newline(), ranges).map(
            |((input, output), _, ranges)| -> almanac::Result<MappingStage> {
                let ranges = ranges.into_iter().collect::<almanac::Result<Vec<_>>>()?;
                Ok(MappingStage::new(input, output, ranges))
            },
        )
    }

    impl Almanac {
        pub fn parser<Input>() -> impl Parser<Input, Output = almanac::Result<Self>>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let stages = c::sep_by1::<Vec<_>, _, _, _>(stage(), c::char::newline());

            (seeds(), c::char::spaces(), stages).map(
                |(seeds, _, stages)| -> almanac::Result<Self> {
                    let stages = stages
                        .into_iter()
                        .collect::<almanac::Result<Vec<_>>>()?;
                    Ok(Almanac {
                        seeds,
                        pipeline: Pipeline::new(stages),
                    })
                },
            )
        }
    }
}
