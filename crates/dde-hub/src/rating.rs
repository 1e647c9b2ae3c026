//! 可行性評級

use dde_core::HubViabilityCriteria;
use serde::{Deserialize, Serialize};

use crate::HubEconomicsResult;

/// 可行性評級層級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityRating {
    /// 優秀（三項理想門檻全數達成）
    Excellent,
    /// 良好（達成兩項理想門檻）
    Good,
    /// 邊際（可行但理想門檻達成不足兩項）
    Marginal,
    /// 不佳（未通過硬性門檻）
    Poor,
}

impl ViabilityRating {
    /// 評級代碼（與序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            ViabilityRating::Excellent => "excellent",
            ViabilityRating::Good => "good",
            ViabilityRating::Marginal => "marginal",
            ViabilityRating::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ViabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 評級結果（含顯示用文字）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubRating {
    /// 評級
    pub rating: ViabilityRating,

    /// 顯示標籤
    pub label: String,

    /// 說明文字
    pub message: String,
}

/// 評級計算器
pub struct RatingCalculator;

impl RatingCalculator {
    /// 依硬性門檻與理想門檻評級
    ///
    /// 未通過硬性門檻一律不佳；通過後依理想門檻達成數分級：
    /// 3 項 → 優秀、2 項 → 良好、其餘 → 邊際。
    /// 每次評估獨立，無狀態
    pub fn rate(result: &HubEconomicsResult, criteria: &HubViabilityCriteria) -> HubRating {
        if !result.is_economical {
            return Self::build(ViabilityRating::Poor);
        }

        let mut ideals_met = 0;
        if result.store_count >= criteria.ideal_stores {
            ideals_met += 1;
        }
        if result.monthly_savings >= criteria.ideal_monthly_savings {
            ideals_met += 1;
        }
        if matches!(result.break_even_months, Some(months) if months <= criteria.ideal_break_even_months)
        {
            ideals_met += 1;
        }

        let rating = match ideals_met {
            3 => ViabilityRating::Excellent,
            2 => ViabilityRating::Good,
            _ => ViabilityRating::Marginal,
        };

        Self::build(rating)
    }

    fn build(rating: ViabilityRating) -> HubRating {
        let (label, message) = match rating {
            ViabilityRating::Excellent => (
                "優秀",
                "各項指標均達理想門檻，強烈建議建立集貨中心",
            ),
            ViabilityRating::Good => (
                "良好",
                "多數指標達理想門檻，建議建立集貨中心",
            ),
            ViabilityRating::Marginal => (
                "邊際",
                "經濟上可行但效益有限，建議重新檢視成本假設後再決定",
            ),
            ViabilityRating::Poor => (
                "不佳",
                "未通過硬性門檻，不建議建立集貨中心",
            ),
        };

        HubRating {
            rating,
            label: label.to_string(),
            message: message.to_string(),
        }
    }
}
