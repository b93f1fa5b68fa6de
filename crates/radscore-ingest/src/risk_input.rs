//! Risk factor and risk model file loading.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use radscore_core::RiskModel;
use radscore_model::RiskFactors;

use crate::error::{IngestError, Result};

/// Environment variable naming a TOML risk model file.
pub const RISK_MODEL_ENV_VAR: &str = "RADSCORE_RISK_MODEL";

/// Read a single [`RiskFactors`] record from a JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not hold a valid
/// risk factor object.
pub fn read_risk_factors_json(path: &Path) -> Result<RiskFactors> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let factors = serde_json::from_str(&contents).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "risk factors loaded");
    Ok(factors)
}

/// Load risk model coefficients from a TOML file.
///
/// Keys that are not present keep their built-in values; unknown keys are
/// rejected.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_risk_model(path: &Path) -> Result<RiskModel> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let model = toml::from_str(&contents).map_err(|e| IngestError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "risk model loaded");
    Ok(model)
}

/// Resolve which risk model file to use, if any.
///
/// Resolution order:
/// 1. `explicit` path
/// 2. `RADSCORE_RISK_MODEL` environment variable (ignored when empty)
/// 3. none, meaning the built-in coefficients
pub fn resolve_model_path(explicit: Option<&Path>) -> Option<PathBuf> {
    let env_value = std::env::var(RISK_MODEL_ENV_VAR).ok();
    resolve_model_path_from(explicit, env_value.as_deref())
}

/// [`resolve_model_path`] with the environment value supplied by the caller.
pub fn resolve_model_path_from(
    explicit: Option<&Path>,
    env_value: Option<&str>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the risk model selected by [`resolve_model_path`].
///
/// # Errors
///
/// Returns an error when a model file is selected but cannot be loaded.
pub fn load_configured_risk_model(explicit: Option<&Path>) -> Result<RiskModel> {
    match resolve_model_path(explicit) {
        Some(path) => load_risk_model(&path),
        None => Ok(RiskModel::default()),
    }
}
