pub mod error;
pub mod followup;
pub mod interval;
pub mod lesion;
pub mod recist;
pub mod risk;
pub mod tnm;

pub use error::{ModelError, Result};
pub use followup::{FollowUp, FollowUpPriority, FollowUpStatus};
pub use interval::{IntervalUnit, RecommendationInterval};
pub use lesion::{LesionKind, LesionMeasurement};
pub use recist::{RecistResult, ResponseCategory, TimepointAssessment};
pub use risk::{MAX_AGE, RiskCategory, RiskFactors, RiskResult};
pub use tnm::{M_CODES, N_CODES, OverallStage, T_CODES, TnmCodes};
