//! 集貨中心成本試算

use dde_core::{HubCostAssumptions, HubScenario, HubViabilityCriteria, LocationCostProfile};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 每月由中心發往集貨中心的整批運送趟數（固定）
pub const BULK_SHIPMENTS_PER_MONTH: u32 = 4;

/// 成本試算結果（保留所有中間項，供逐項稽核）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubEconomicsResult {
    /// 服務門市數
    pub store_count: u32,

    /// 目前每月成本（逐店直送）
    pub current_monthly_cost: Decimal,

    /// 整批運送成本（中心 → 集貨中心）
    pub bulk_shipment_cost: Decimal,

    /// 在地配送成本（集貨中心 → 門市）
    pub local_delivery_cost: Decimal,

    /// 集貨中心佣金
    pub hub_commission: Decimal,

    /// 倉儲費
    pub storage_fee_cost: Decimal,

    /// 導入後每月成本
    pub projected_monthly_cost: Decimal,

    /// 每月節省金額（可為負）
    pub monthly_savings: Decimal,

    /// 回本月數（節省 ≤ 0 時為 None，永遠無法回本）
    pub break_even_months: Option<u32>,

    /// 12 個月投資報酬率（%，建置成本 ≤ 0 時為 None）
    pub roi_12_months: Option<Decimal>,

    /// 是否通過全部硬性門檻
    pub is_economical: bool,
}

/// 成本試算計算器
pub struct EconomicsCalculator;

impl EconomicsCalculator {
    /// 試算方案經濟效益
    ///
    /// 硬性門檻三項全部通過才算可行：每月節省 ≥ 最低要求、
    /// 門市數 ≥ 最低門市數、回本月數存在且 ≤ 最長可接受月數
    pub fn evaluate(
        scenario: &HubScenario,
        assumptions: &HubCostAssumptions,
        criteria: &HubViabilityCriteria,
    ) -> dde_core::Result<HubEconomicsResult> {
        assumptions.validate()?;
        criteria.validate()?;
        scenario.validate()?;

        let store_count = Decimal::from(scenario.store_count);
        let shipments = Decimal::from(assumptions.shipments_per_store_per_month);

        // 1. 目前成本：逐店直送
        let current_monthly_cost =
            store_count * shipments * assumptions.direct_shipping_cost;

        // 2. 整批運送：每月固定 4 趟，按門市數規模計價並打折
        let bulk_shipment_cost = Decimal::from(BULK_SHIPMENTS_PER_MONTH)
            * (store_count
                * assumptions.direct_shipping_cost
                * (Decimal::ONE - assumptions.bulk_discount_rate));

        // 3. 在地配送：集貨中心到門市
        let local_delivery_cost =
            store_count * shipments * assumptions.local_delivery_cost;

        // 4. 佣金：按出貨金額抽成
        let hub_commission = store_count
            * shipments
            * assumptions.average_order_value
            * (scenario.commission_rate / Decimal::from(100));

        // 5. 倉儲費：方案直接提供的固定月費
        let storage_fee_cost = scenario.monthly_storage_fee;

        // 6-7. 導入後成本與節省
        let projected_monthly_cost =
            bulk_shipment_cost + local_delivery_cost + hub_commission + storage_fee_cost;
        let monthly_savings = current_monthly_cost - projected_monthly_cost;

        // 8. 回本月數：節省為正才有定義
        let break_even_months = if monthly_savings > Decimal::ZERO {
            // 比值超出 u32 範圍時視為永遠無法回本
            (scenario.one_time_setup_cost / monthly_savings)
                .ceil()
                .to_u32()
        } else {
            None
        };

        // 9. 12 個月投資報酬率
        let roi_12_months = if scenario.one_time_setup_cost > Decimal::ZERO {
            Some(
                monthly_savings * Decimal::from(12) / scenario.one_time_setup_cost
                    * Decimal::from(100),
            )
        } else {
            None
        };

        // 10. 硬性門檻
        let is_economical = monthly_savings >= criteria.minimum_monthly_savings
            && scenario.store_count >= criteria.minimum_stores
            && matches!(break_even_months, Some(months) if months <= criteria.maximum_break_even_months);

        Ok(HubEconomicsResult {
            store_count: scenario.store_count,
            current_monthly_cost,
            bulk_shipment_cost,
            local_delivery_cost,
            hub_commission,
            storage_fee_cost,
            projected_monthly_cost,
            monthly_savings,
            break_even_months,
            roi_12_months,
            is_economical,
        })
    }

    /// 以門市成本側寫彙總實際觀測的目前每月成本
    ///
    /// 作為統一假設基準的替代：各店運費與頻率不同時用這個
    pub fn current_cost_from_profiles(profiles: &[LocationCostProfile]) -> Decimal {
        profiles.iter().map(|profile| profile.monthly_cost()).sum()
    }
}
