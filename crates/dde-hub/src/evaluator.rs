//! 方案評估主流程

use dde_core::{HubCostAssumptions, HubScenario, HubViabilityCriteria};
use rayon::prelude::*;

use crate::{
    EconomicsCalculator, HubEvaluation, RatingCalculator, RecommendationCalculator,
};

/// 集貨中心方案評估器
///
/// 純計算，不持有狀態；成本假設與門檻由呼叫端注入，
/// 同一批評估期間視為不可變
pub struct HubEvaluator;

impl HubEvaluator {
    /// 評估單一方案：成本試算 → 評級 → 核准建議
    pub fn evaluate(
        scenario: &HubScenario,
        assumptions: &HubCostAssumptions,
        criteria: &HubViabilityCriteria,
    ) -> dde_core::Result<HubEvaluation> {
        tracing::debug!(
            "評估集貨中心方案: {} ({} 家門市)",
            scenario.name,
            scenario.store_count
        );

        let economics = EconomicsCalculator::evaluate(scenario, assumptions, criteria)?;
        let rating = RatingCalculator::rate(&economics, criteria);
        let recommendation =
            RecommendationCalculator::recommend(&economics, rating.rating, criteria);

        tracing::debug!(
            "方案 {} 評級: {} (每月節省 {})",
            scenario.name,
            rating.rating,
            economics.monthly_savings
        );

        Ok(HubEvaluation {
            scenario_id: scenario.id,
            scenario_name: scenario.name.clone(),
            economics,
            rating,
            recommendation,
        })
    }

    /// 批次比較多個方案（並行）
    ///
    /// 方案之間無順序相依；單一方案驗證失敗不影響其他方案
    pub fn compare(
        scenarios: &[HubScenario],
        assumptions: &HubCostAssumptions,
        criteria: &HubViabilityCriteria,
    ) -> Vec<dde_core::Result<HubEvaluation>> {
        tracing::info!("開始方案比較：{} 個方案", scenarios.len());

        let results: Vec<_> = scenarios
            .par_iter()
            .map(|scenario| Self::evaluate(scenario, assumptions, criteria))
            .collect();

        let approved = results
            .iter()
            .filter(|r| matches!(r, Ok(e) if e.recommendation.should_approve))
            .count();
        tracing::info!("方案比較完成：{} 個方案建議核准", approved);

        results
    }

    /// 從評估結果中挑出最佳方案：建議核准者取每月節省最高的
    pub fn pick_best(evaluations: &[HubEvaluation]) -> Option<&HubEvaluation> {
        evaluations
            .iter()
            .filter(|evaluation| evaluation.recommendation.should_approve)
            .max_by_key(|evaluation| evaluation.economics.monthly_savings)
    }
}
