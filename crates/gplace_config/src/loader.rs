//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{AnnealConfig, GreedyConfig, PlacerConfig, ScheduleConfig};
use std::path::Path;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "gplace.toml";

/// Loads and validates a placer configuration from the given file.
pub fn load_config(path: &Path) -> Result<PlacerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a placer configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<PlacerConfig, ConfigError> {
    let config: PlacerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

impl PlacerConfig {
    /// Checks every section, reporting the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.anneal.validate()?;
        self.greedy.validate()?;
        self.schedule.validate()
    }
}

impl AnnealConfig {
    /// Checks temperatures, perturbation bounds and the iteration cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_anneal(self)
    }
}

impl GreedyConfig {
    /// Checks that the grid step is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_step < 1 {
            return Err(ConfigError::invalid("greedy.grid_step", "must be at least 1"));
        }
        Ok(())
    }
}

impl ScheduleConfig {
    /// Checks tier ordering, attempt counts and cooling rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_schedule(self)
    }
}

fn validate_anneal(anneal: &AnnealConfig) -> Result<(), ConfigError> {
    if !(anneal.min_temperature.is_finite() && anneal.min_temperature > 0.0) {
        return Err(ConfigError::invalid(
            "anneal.min_temperature",
            "must be a positive number",
        ));
    }
    if !(anneal.initial_temperature.is_finite()
        && anneal.initial_temperature > anneal.min_temperature)
    {
        return Err(ConfigError::invalid(
            "anneal.initial_temperature",
            "must be finite and above anneal.min_temperature",
        ));
    }
    if anneal.perturbation_radius < 1 {
        return Err(ConfigError::invalid(
            "anneal.perturbation_radius",
            "must be at least 1",
        ));
    }
    if anneal.perturbation_attempts == 0 {
        return Err(ConfigError::invalid(
            "anneal.perturbation_attempts",
            "must be at least 1",
        ));
    }
    if anneal.max_iterations == 0 {
        return Err(ConfigError::invalid(
            "anneal.max_iterations",
            "must be at least 1",
        ));
    }
    Ok(())
}

fn validate_schedule(schedule: &ScheduleConfig) -> Result<(), ConfigError> {
    if schedule.tiers.is_empty() {
        return Err(ConfigError::invalid(
            "schedule.tiers",
            "at least one tier is required",
        ));
    }

    let mut previous: Option<usize> = None;
    for (i, tier) in schedule.tiers.iter().enumerate() {
        if tier.attempts == 0 {
            return Err(ConfigError::invalid(
                format!("schedule.tiers[{i}].attempts"),
                "must be at least 1",
            ));
        }
        if !is_cooling_rate(tier.cooling_rate) {
            return Err(ConfigError::invalid(
                format!("schedule.tiers[{i}].cooling_rate"),
                "must lie strictly between 0 and 1",
            ));
        }
        if let (Some(prev), Some(max)) = (previous, tier.max_gates) {
            if max <= prev {
                return Err(ConfigError::invalid(
                    format!("schedule.tiers[{i}].max_gates"),
                    "tiers must be ordered by ascending max_gates",
                ));
            }
        }
        previous = tier.max_gates.or(previous);
    }

    if let Some(rate) = schedule.final_cooling_rate {
        if !is_cooling_rate(rate) {
            return Err(ConfigError::invalid(
                "schedule.final_cooling_rate",
                "must lie strictly between 0 and 1",
            ));
        }
    }
    Ok(())
}

fn is_cooling_rate(rate: f64) -> bool {
    rate > 0.0 && rate < 1.0
}
