//! Clinical scoring engines.
//!
//! Every calculator here is a pure function of its inputs: no I/O, no shared
//! state, and identical output for identical input.

pub mod compliance;
pub mod followup;
pub mod recist;
pub mod risk;
pub mod staging;

pub use compliance::{ComplianceMetrics, StatusBreakdown, compliance_metrics};
pub use followup::{DAYS_PER_MONTH, FollowUpPlan, due_date, recommend_follow_up};
pub use recist::{
    PARTIAL_RESPONSE_THRESHOLD, PROGRESSION_THRESHOLD, assess_response, calculate_recist,
    classify_response, split_timepoints, target_sum_mm,
};
pub use risk::{RiskModel, calculate_risk};
pub use staging::{StageExt, overall_stage};
