//! Plain-text batch output.
//!
//! Both writers use the same framing: every value is followed by a single
//! space, lines are joined with `\n`, and the output carries no trailing
//! newline.  The trailing space per value is part of the format.

use std::io::Write;
use std::path::Path;

use sg_core::GridPoint;
use sg_pricing::PriceMatrix;

/// Serialize the cost matrix, one line per source country.
pub fn write_costs<W: Write>(out: &mut W, costs: &PriceMatrix) -> std::io::Result<()> {
    for (i, row) in costs.rows().iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        for cost in row {
            write!(out, "{cost} ")?;
        }
    }
    Ok(())
}

/// Serialize ray traces, one line per ray, each cell as `x y `.
pub fn write_traces<W: Write>(out: &mut W, traces: &[Vec<GridPoint>]) -> std::io::Result<()> {
    for (i, trace) in traces.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        for cell in trace {
            write!(out, "{} {} ", cell.x, cell.y)?;
        }
    }
    Ok(())
}

/// Write the cost matrix straight to a file.
pub fn write_costs_file(path: &Path, costs: &PriceMatrix) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_costs(&mut file, costs)?;
    file.flush()
}

/// Write ray traces straight to a file.
pub fn write_traces_file(path: &Path, traces: &[Vec<GridPoint>]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_traces(&mut file, traces)?;
    file.flush()
}
