//! CSV map report.
//!
//! Creates two files in the configured report directory:
//! - `capitals.csv` — one row per country: id and capital point.
//! - `borders.csv`  — one row per directed adjacency: source, neighbour,
//!   and the direct hop cost between their capitals.
//!
//! The report is a read-only view over the capital graph; it never feeds
//! back into pricing.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use sg_core::CountryId;
use sg_route::CapitalGraph;

use crate::ReportResult;

/// Writes the capital graph to two CSV files.
pub struct MapReportWriter {
    capitals: Writer<File>,
    borders: Writer<File>,
    finished: bool,
}

impl MapReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut capitals = Writer::from_path(dir.join("capitals.csv"))?;
        capitals.write_record(["country", "x", "y"])?;

        let mut borders = Writer::from_path(dir.join("borders.csv"))?;
        borders.write_record(["country", "neighbour", "distance"])?;

        Ok(Self { capitals, borders, finished: false })
    }

    /// Emit one capital row per country and one border row per directed
    /// adjacency edge.
    pub fn write_graph(&mut self, graph: &CapitalGraph) -> ReportResult<()> {
        for c in 0..graph.country_count() {
            let country = CountryId(c as u16);
            let capital = graph.capital(country);
            self.capitals.write_record(&[
                country.0.to_string(),
                capital.x.to_string(),
                capital.y.to_string(),
            ])?;
            for &neighbour in graph.neighbours(country) {
                self.borders.write_record(&[
                    country.0.to_string(),
                    neighbour.0.to_string(),
                    graph.edge_cost(country, neighbour).to_string(),
                ])?;
            }
        }
        Ok(())
    }

    /// Flush both files.  Idempotent.
    pub fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.capitals.flush()?;
        self.borders.flush()?;
        Ok(())
    }
}
