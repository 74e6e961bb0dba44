/*
 * This file contains template code.
 * There is no need to edit this file unless you want to change template functionality.
 */
use std::process::{self, Command, Stdio};

use advent_of_code_2023::{parse_args, parse_exec_time, ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

/// Days with a solution under `src/bin/`.
const DAYS: &[u8] = &[5];

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to process arguments: {e}");
            process::exit(1);
        }
    };

    let days = DAYS
        .iter()
        .copied()
        .filter(|&day| args.day.map_or(true, |only| only == day));

    let mut total: f64 = 0.0;
    let mut ran_any = false;

    for day in days {
        ran_any = true;
        let day = format!("{day:02}");

        let mut cmd_args = vec!["run", "--bin", day.as_str()];
        if cfg!(not(debug_assertions)) {
            cmd_args.push("--release");
        }
        if args.examples {
            cmd_args.extend(["--", "--examples"]);
        }

        let cmd = Command::new("cargo")
            .args(&cmd_args)
            .stderr(Stdio::inherit())
            .output()
            .unwrap();

        println!("----------");
        println!("{ANSI_BOLD}| Day {day} |{ANSI_RESET}");
        println!("----------");

        let output = String::from_utf8(cmd.stdout).unwrap();
        let is_empty = output.is_empty();

        println!(
            "{}",
            if is_empty {
                "Not solved."
            } else {
                output.trim()
            }
        );

        if !is_empty {
            total += parse_exec_time(&output);
        }
    }

    if !ran_any {
        eprintln!("No solution for day {:?}.", args.day);
        process::exit(1);
    }

    println!("{ANSI_BOLD}Total:{ANSI_RESET} {ANSI_ITALIC}{total:.2}ms{ANSI_RESET}");
}
