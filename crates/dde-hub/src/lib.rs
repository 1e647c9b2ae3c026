//! # DDE 集貨中心經濟效益引擎
//!
//! 集貨中心方案的成本試算、可行性評級與核准建議

pub mod economics;
pub mod evaluator;
pub mod rating;
pub mod recommendation;

// Re-export 主要類型
pub use economics::{EconomicsCalculator, HubEconomicsResult};
pub use evaluator::HubEvaluator;
pub use rating::{HubRating, RatingCalculator, ViabilityRating};
pub use recommendation::{HubRecommendation, Priority, RecommendationCalculator};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 單一方案的完整評估結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubEvaluation {
    /// 來源方案ID
    pub scenario_id: Uuid,

    /// 方案名稱
    pub scenario_name: String,

    /// 成本試算
    pub economics: HubEconomicsResult,

    /// 可行性評級
    pub rating: HubRating,

    /// 核准建議
    pub recommendation: HubRecommendation,
}
