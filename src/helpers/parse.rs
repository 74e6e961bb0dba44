use std::fmt;
use std::str::FromStr;

use combine::{easy, EasyParser, ParseError, Parser, Stream};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Parses all of `s` with `parser`. Trailing input is an error.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

// "1234" -> 1234
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    combine::from_str(combine::many1::<String, _, _>(
        combine::parser::char::digit(),
    ))
}
