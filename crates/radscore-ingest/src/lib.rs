pub mod error;
pub mod measurements;
pub mod risk_input;

pub use error::{IngestError, Result};
pub use measurements::read_measurements_csv;
pub use risk_input::{
    RISK_MODEL_ENV_VAR, load_configured_risk_model, load_risk_model, read_risk_factors_json,
    resolve_model_path, resolve_model_path_from,
};
