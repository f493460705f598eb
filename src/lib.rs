pub mod cli;
pub mod config;
pub mod logging;
pub mod utils;
pub mod version;
pub mod versioning;

/// Re-export commonly used items
pub use version::VERSION;
pub use versioning::{
    calculate, calculate_chain, CreationMethod, MajorMinorCalculator, Version, VersionCalculator,
    VersionError,
};
