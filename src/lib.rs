// Export modules for library usage
pub mod cli;
pub mod config;
pub mod engine;
pub mod factors;
pub mod facts;
pub mod io;
pub mod pipeline;
pub mod risk;
pub mod stats;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::engine::{combine, evaluate, Evaluation};
pub use crate::facts::{Dependency, DependencySnapshot, Facts};
pub use crate::io::{create_writer, load_snapshots, OutputFormat, OutputWriter};
pub use crate::pipeline::evaluate_all;
pub use crate::risk::{Band, Distribution, Recommendation, RiskNode, Signal};
pub use crate::stats::{MonthKey, Trend};
