use clap::Parser;

use log::{error, info};

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use sudoku_csp::SudokuGrid;
use sudoku_csp::solver::{CspSolver, Solution, Solver};

/// Solves a 9x9 Sudoku puzzle by modeling it as a constraint satisfaction
/// problem.
#[derive(Parser, Debug)]
#[command(name = "sudoku-csp", version,
    about = "Solves 9x9 Sudoku puzzles read from a text file")]
struct Cli {

    /// Path to the puzzle file. The file must contain 81 digits in reading
    /// order, with 0 denoting a blank cell; all non-digit characters are
    /// ignored.
    input: PathBuf,

    /// Path of the file to which the solved grid is appended as nine lines
    /// of nine space-separated digits.
    output: PathBuf
}

fn format_solution(grid: &SudokuGrid) -> String {
    let mut text = String::new();

    for row in grid.to_rows() {
        for digit in row {
            text.push_str(digit.to_string().as_str());
            text.push(' ');
        }

        text.push('\n');
    }

    text
}

fn run(cli: &Cli) -> Result<(), String> {
    let text = fs::read_to_string(&cli.input)
        .map_err(|e| format!("cannot read {}: {}", cli.input.display(), e))?;
    let grid = SudokuGrid::parse(text.as_str())
        .map_err(|e| format!("{}: {}", cli.input.display(), e))?;

    info!("parsed a puzzle with {} clues", grid.count_clues());

    let start = Instant::now();
    let solution = CspSolver.solve(&grid);

    match solution {
        Solution::Solved(solved) => {
            info!("solved in {:?}", start.elapsed());

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&cli.output)
                .map_err(|e| format!("cannot open {}: {}",
                    cli.output.display(), e))?;
            file.write_all(format_solution(&solved).as_bytes())
                .map_err(|e| format!("cannot write {}: {}",
                    cli.output.display(), e))?;
            Ok(())
        },
        Solution::Impossible =>
            Err(String::from("the puzzle has no solution"))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(message) = run(&cli) {
        error!("{}", message);
        process::exit(1);
    }
}
