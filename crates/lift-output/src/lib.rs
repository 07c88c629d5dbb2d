//! `lift-output` — statistics, tabular output, and text rendering for the
//! lift dispatch simulator.
//!
//! | Item               | Purpose                                                   |
//! |--------------------|-----------------------------------------------------------|
//! | [`SummaryStats`]   | Event-driven run totals and means                         |
//! | [`OutputWriter`]   | Backend trait for per-step rows                           |
//! | [`CsvWriter`]      | `step_summaries.csv`, `elevator_snapshots.csv`            |
//! | [`OutputObserver`] | `DispatchObserver` that feeds stats and a writer          |
//! | [`render_panel`]   | ASCII building panel for a [`FleetSnapshot`]              |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer, &config);
//! fleet.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! println!("{}", obs.stats());
//! ```
//!
//! [`FleetSnapshot`]: lift_dispatch::FleetSnapshot

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod stats;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use render::render_panel;
pub use row::{ElevatorSnapshotRow, StepSummaryRow};
pub use stats::SummaryStats;
pub use writer::OutputWriter;
