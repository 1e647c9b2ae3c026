//! 核准建議

use dde_core::HubViabilityCriteria;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rating::ViabilityRating;
use crate::HubEconomicsResult;

/// 12 個月投資報酬率的理想門檻（%）：一年內回收建置成本
const IDEAL_ROI_12_MONTHS: i64 = 100;

/// 建議優先序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// 高（評級優秀）
    High,
    /// 中（評級良好）
    Medium,
    /// 低
    Low,
}

impl Priority {
    /// 優先序代碼（與序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// 核准建議
///
/// 四個構面（門市數、節省、回本、投資報酬率）各貢獻恰好一句分類陳述：
/// 達理想門檻列入理由，否則列入疑慮，不重複也不遺漏
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubRecommendation {
    /// 是否建議核准
    pub should_approve: bool,

    /// 優先序
    pub priority: Priority,

    /// 支持理由
    pub reasons: Vec<String>,

    /// 疑慮
    pub concerns: Vec<String>,
}

/// 建議計算器
pub struct RecommendationCalculator;

impl RecommendationCalculator {
    /// 產生核准建議
    ///
    /// 評級優秀或良好 → 建議核准；疑慮的比較基準：
    /// 連硬性門檻都未達時引最低門檻，否則引理想門檻
    pub fn recommend(
        result: &HubEconomicsResult,
        rating: ViabilityRating,
        criteria: &HubViabilityCriteria,
    ) -> HubRecommendation {
        let should_approve =
            matches!(rating, ViabilityRating::Excellent | ViabilityRating::Good);
        let priority = match rating {
            ViabilityRating::Excellent => Priority::High,
            ViabilityRating::Good => Priority::Medium,
            _ => Priority::Low,
        };

        let mut reasons = Vec::new();
        let mut concerns = Vec::new();

        // 構面一：門市數
        if result.store_count >= criteria.ideal_stores {
            reasons.push(format!(
                "門市數 {} 已達理想規模（≥ {}）",
                result.store_count, criteria.ideal_stores
            ));
        } else if result.store_count < criteria.minimum_stores {
            concerns.push(format!(
                "門市數 {} 低於最低門檻 {}",
                result.store_count, criteria.minimum_stores
            ));
        } else {
            concerns.push(format!(
                "門市數 {} 未達理想規模 {}",
                result.store_count, criteria.ideal_stores
            ));
        }

        // 構面二：每月節省
        if result.monthly_savings >= criteria.ideal_monthly_savings {
            reasons.push(format!(
                "每月節省 {} 已達理想水準（≥ {}）",
                result.monthly_savings, criteria.ideal_monthly_savings
            ));
        } else if result.monthly_savings < criteria.minimum_monthly_savings {
            concerns.push(format!(
                "每月節省 {} 低於最低要求 {}",
                result.monthly_savings, criteria.minimum_monthly_savings
            ));
        } else {
            concerns.push(format!(
                "每月節省 {} 未達理想水準 {}",
                result.monthly_savings, criteria.ideal_monthly_savings
            ));
        }

        // 構面三：回本月數
        match result.break_even_months {
            Some(months) if months <= criteria.ideal_break_even_months => {
                reasons.push(format!(
                    "{} 個月即可回本（理想為 {} 個月內）",
                    months, criteria.ideal_break_even_months
                ));
            }
            Some(months) if months > criteria.maximum_break_even_months => {
                concerns.push(format!(
                    "回本需 {} 個月，超過最長可接受的 {} 個月",
                    months, criteria.maximum_break_even_months
                ));
            }
            Some(months) => {
                concerns.push(format!(
                    "回本需 {} 個月，未達理想的 {} 個月內",
                    months, criteria.ideal_break_even_months
                ));
            }
            None => {
                concerns.push("每月節省為負，無法回本".to_string());
            }
        }

        // 構面四：12 個月投資報酬率
        match result.roi_12_months {
            Some(roi) if roi >= Decimal::from(IDEAL_ROI_12_MONTHS) => {
                reasons.push(format!(
                    "12 個月投資報酬率 {}%，一年內即可回收建置成本",
                    roi
                ));
            }
            Some(roi) => {
                concerns.push(format!(
                    "12 個月投資報酬率僅 {}%，低於 {}%",
                    roi, IDEAL_ROI_12_MONTHS
                ));
            }
            None => {
                concerns.push("無法計算 12 個月投資報酬率".to_string());
            }
        }

        HubRecommendation {
            should_approve,
            priority,
            reasons,
            concerns,
        }
    }
}
