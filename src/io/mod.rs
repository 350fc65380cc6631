pub mod input;
pub mod output;

pub use input::{load_snapshots, SnapshotError};
pub use output::{create_writer, OutputFormat, OutputWriter};
