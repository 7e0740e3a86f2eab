//! gitfolk-io: CSV I/O around the gitfolk matching core
//!
//! Readers and writers for the tables the pipeline exchanges with
//! humans and spreadsheets:
//!
//! - identity sets (`name,email`)
//! - scored candidate-pair tables with feature columns and verdicts
//! - labeled ground-truth tables coming back from manual review
//! - disagreement reports for spot checks
//!
//! All matching logic stays in `gitfolk-core`; this crate only moves
//! records across the file boundary.

pub mod error;
pub mod identities;
pub mod labeled;
pub mod pairs;
pub mod report;

pub use error::{IoError, IoResult};
pub use identities::{read_identities, write_identities};
pub use labeled::read_labeled_pairs;
pub use pairs::write_scored_pairs;
pub use report::write_disagreements;
