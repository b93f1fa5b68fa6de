//! Follow-up scheduling for scored nodules.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use radscore_model::{
    FollowUp, FollowUpPriority, IntervalUnit, RecommendationInterval, RiskCategory, RiskResult,
};

/// Days per month used when scheduling month and year intervals.
pub const DAYS_PER_MONTH: u64 = 30;

/// Due date for a follow-up starting at `reference`.
///
/// Month and year intervals advance by 30-day months; day and week intervals
/// advance by their exact length. Ranged intervals use the lower bound.
pub fn due_date(reference: NaiveDate, interval: &RecommendationInterval) -> NaiveDate {
    let days = match interval.unit() {
        IntervalUnit::Days | IntervalUnit::Weeks => u64::from(interval.to_days()),
        IntervalUnit::Months | IntervalUnit::Years => {
            DAYS_PER_MONTH * u64::from(interval.to_months())
        }
    };
    reference
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Recommended next step for a scored nodule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    pub category: RiskCategory,
    pub recommendation: String,
    pub interval: RecommendationInterval,
    pub due_date: NaiveDate,
}

impl FollowUpPlan {
    /// Start tracking this plan as a pending follow-up. High-risk plans are
    /// urgent; everything else is routine.
    pub fn track(&self) -> FollowUp {
        let priority = match self.category {
            RiskCategory::High => FollowUpPriority::Urgent,
            _ => FollowUpPriority::Routine,
        };
        FollowUp::new(self.interval, Some(self.due_date)).with_priority(priority)
    }
}

/// Build a follow-up plan from a risk result, scheduled from `reference`.
pub fn recommend_follow_up(result: &RiskResult, reference: NaiveDate) -> FollowUpPlan {
    let interval = result.category.follow_up_interval();
    FollowUpPlan {
        category: result.category,
        recommendation: result.recommendation().to_string(),
        interval,
        due_date: due_date(reference, &interval),
    }
}
