use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};

use clap::Args;
use lapjv_core::validate::check_rectangular;
use lapjv_core::{
    is_square, load_matrix, read_matrix, solution_to_json, solve, to_square, Cost, MatrixGenerator,
    Solution,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use super::MatrixArgs;

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Print the solution, including dual variables, as JSON.
    #[arg(long)]
    pub json: bool,
    /// Decode matrix entries as floating-point numbers instead of integers.
    #[arg(long)]
    pub float: bool,
}

pub fn run(matrix: &MatrixArgs, args: &SolveArgs) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.float {
        let costs = load::<f64>(matrix, |value| value as f64)?;
        solve_and_report(&costs, args.json, &mut out)
    } else {
        let costs = load::<i64>(matrix, |value| value)?;
        solve_and_report(&costs, args.json, &mut out)
    }
}

/// Reads the matrix from the first available source: `--filename`, the
/// interactive generator, generator flags, then stdin.
fn load<T: DeserializeOwned>(
    matrix: &MatrixArgs,
    convert: fn(i64) -> T,
) -> Result<Vec<Vec<T>>, Box<dyn Error>> {
    if let Some(path) = &matrix.filename {
        debug!(path = %path.display(), "reading matrix file");
        return Ok(load_matrix(path)?);
    }
    if matrix.interactive || matrix.requests_generation() {
        let config = matrix.resolve_config()?;
        let generated = MatrixGenerator::new(config)?.generate();
        return Ok(generated
            .into_iter()
            .map(|row| row.into_iter().map(convert).collect())
            .collect());
    }
    debug!("reading matrix from stdin");
    Ok(read_matrix(io::stdin().lock())?)
}

fn solve_and_report<T, W>(costs: &[Vec<T>], json: bool, out: &mut W) -> Result<(), Box<dyn Error>>
where
    T: Cost + Serialize,
    W: Write,
{
    check_rectangular(costs)?;
    let solution = if is_square(costs) {
        solve(costs)?
    } else {
        let padded = to_square(costs);
        info!(
            rows = costs.len(),
            size = padded.len(),
            "padding non-square matrix with zeros"
        );
        solve(&padded)?
    };
    if json {
        writeln!(out, "{}", solution_to_json(&solution)?)?;
    } else {
        write_summary(out, &solution)?;
    }
    Ok(())
}

fn write_summary<T, W: Write>(out: &mut W, solution: &Solution<T>) -> io::Result<()> {
    writeln!(out, "Matrix resolution : ")?;
    writeln!(out, "\tCost : \t\t{:.6}", solution.cost)?;
    writeln!(out, "\tRow solution : \t{}", bracketed(&solution.row_to_col))?;
    writeln!(out, "\tCol solution : \t{}", bracketed(&solution.col_to_row))
}

fn bracketed<D: Display>(values: &[D]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(" "))
}
