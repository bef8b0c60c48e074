use crate::EpiError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Simulation parameters. Owned by the caller and handed to the engine as a
/// value; the engine never reads configuration from anywhere else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Per-contact, per-day probability that an infected node infects a
    /// susceptible neighbor.
    pub p_infect: f64,
    /// Per-day probability that an infected node recovers early.
    pub p_recover: f64,
    /// Days after which recovery is forced. This is what guarantees the
    /// simulation terminates.
    pub days_to_recover: u32,
    /// Hard stop after this many simulated days, infections or not.
    pub max_days: Option<u32>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            p_infect: 0.2,
            p_recover: 0.1,
            days_to_recover: 7,
            max_days: None,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), EpiError> {
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&value) {
        return Err(EpiError::config(format!(
            "{name} must be a probability in [0.0, 1.0], got {value}"
        )));
    }
    Ok(())
}

impl Params {
    pub fn validate(&self) -> Result<(), EpiError> {
        check_probability("p_infect", self.p_infect)?;
        check_probability("p_recover", self.p_recover)?;
        if self.days_to_recover < 1 {
            return Err(EpiError::config("days_to_recover must be at least 1"));
        }
        if self.max_days == Some(0) {
            return Err(EpiError::config("max_days must be at least 1 when set"));
        }
        Ok(())
    }

    /// Loads and validates parameters from a JSON file. Fields not present in
    /// the file keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Params, EpiError> {
        let params: Params = serde_json::from_reader(File::open(path)?)?;
        params.validate()?;
        Ok(params)
    }
}
