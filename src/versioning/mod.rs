pub mod types;

use tracing::debug;
pub use types::*;

/// Computes the version that follows `current` for a given creation method.
pub trait VersionCalculator {
    fn calculate(&self, current: Option<&str>, method: CreationMethod) -> Result<String, VersionError>;
}

/// Stateless `major.minor` calculator.
///
/// `None` or an empty string means nothing has been versioned yet and yields
/// the initial version for the method.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorMinorCalculator;

impl VersionCalculator for MajorMinorCalculator {
    fn calculate(&self, current: Option<&str>, method: CreationMethod) -> Result<String, VersionError> {
        let next = match current.filter(|v| !v.is_empty()) {
            None => Version::initial(method),
            Some(raw) => raw.parse::<Version>()?.bump(method)?,
        };
        debug!("{} bump: {} -> {}", method, current.unwrap_or("<none>"), next);
        Ok(next.to_string())
    }
}

/// Calculate the next version with the default calculator.
pub fn calculate(current: Option<&str>, method: CreationMethod) -> Result<String, VersionError> {
    MajorMinorCalculator.calculate(current, method)
}

/// Apply a sequence of bumps starting from `start`, returning every version
/// produced along the way. Stops at the first error.
pub fn calculate_chain(start: Option<&str>, methods: &[CreationMethod]) -> Result<Vec<String>, VersionError> {
    let mut produced: Vec<String> = Vec::with_capacity(methods.len());
    for method in methods {
        let current = produced.last().map(String::as_str).or(start);
        let next = calculate(current, *method)?;
        produced.push(next);
    }
    Ok(produced)
}
