//! `sg-io` — token-stream readers, batch writers, and the CSV map report.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`reader`] | `read_scenario`, `read_rays`, `Scenario`             |
//! | [`writer`] | `write_costs`, `write_traces` (plain-text framing)   |
//! | [`report`] | `MapReportWriter` (capitals.csv, borders.csv)        |
//! | [`error`]  | `ReadError`, `ReportError` and their `Result` aliases|

pub mod error;
pub mod reader;
pub mod report;
pub mod writer;


pub use error::{ReadError, ReadResult, ReportError, ReportResult};
pub use reader::{RayScenario, Scenario, read_rays, read_rays_file, read_scenario, read_scenario_file};
pub use report::MapReportWriter;
pub use writer::{write_costs, write_costs_file, write_traces, write_traces_file};
