/*
 * Use this file if you want to extract helpers from your solutions.
 * Example import from this file: `use advent_of_code_2023::helpers::parse;`.
 */

pub mod parse;
