//! 集貨中心方案模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::HubCostAssumptions;
use crate::{DdeError, Result};

/// 集貨中心方案（單次評估的不可變輸入）
///
/// 引擎不會修改方案本身，每次評估回傳新的結果物件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubScenario {
    /// 方案ID
    pub id: Uuid,

    /// 方案名稱
    pub name: String,

    /// 服務門市數
    pub store_count: u32,

    /// 佣金率（%）
    pub commission_rate: Decimal,

    /// 每月倉儲費
    pub monthly_storage_fee: Decimal,

    /// 一次性建置成本
    pub one_time_setup_cost: Decimal,
}

impl HubScenario {
    /// 創建新的集貨中心方案
    pub fn new(
        name: String,
        store_count: u32,
        commission_rate: Decimal,
        monthly_storage_fee: Decimal,
        one_time_setup_cost: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            store_count,
            commission_rate,
            monthly_storage_fee,
            one_time_setup_cost,
        }
    }

    /// 以成本假設的預設值建立方案（佣金率、倉儲費、建置成本取 default_*）
    pub fn from_assumptions(
        name: String,
        store_count: u32,
        assumptions: &HubCostAssumptions,
    ) -> Self {
        Self::new(
            name,
            store_count,
            assumptions.default_commission_rate,
            assumptions.default_storage_fee,
            assumptions.default_setup_cost,
        )
    }

    /// 驗證方案輸入
    pub fn validate(&self) -> Result<()> {
        if self.one_time_setup_cost < Decimal::ZERO {
            return Err(DdeError::InvalidScenario(format!(
                "建置成本不可為負: {}",
                self.one_time_setup_cost
            )));
        }
        if self.monthly_storage_fee < Decimal::ZERO {
            return Err(DdeError::InvalidScenario(format!(
                "每月倉儲費不可為負: {}",
                self.monthly_storage_fee
            )));
        }
        if self.commission_rate < Decimal::ZERO || self.commission_rate > Decimal::from(100) {
            return Err(DdeError::InvalidScenario(format!(
                "佣金率必須介於 0-100: {}",
                self.commission_rate
            )));
        }
        Ok(())
    }
}

/// 門市成本側寫（每家門市的直送成本與頻率）
///
/// 以彙總方式使用：作為統一假設之外的實際觀測基準
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCostProfile {
    /// 據點ID
    pub location_id: String,

    /// 每趟直送運費
    pub shipment_cost: Decimal,

    /// 每月出貨趟數
    pub shipments_per_month: u32,
}

impl LocationCostProfile {
    /// 創建新的門市成本側寫
    pub fn new(location_id: String, shipment_cost: Decimal, shipments_per_month: u32) -> Self {
        Self {
            location_id,
            shipment_cost,
            shipments_per_month,
        }
    }

    /// 該門市每月直送成本
    pub fn monthly_cost(&self) -> Decimal {
        self.shipment_cost * Decimal::from(self.shipments_per_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_scenario() {
        let scenario = HubScenario::new(
            "北區集貨中心".to_string(),
            12,
            Decimal::from(5),
            Decimal::from(200),
            Decimal::from(5000),
        );

        assert_eq!(scenario.store_count, 12);
        assert_eq!(scenario.commission_rate, Decimal::from(5));
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_scenario_from_assumptions() {
        let assumptions = HubCostAssumptions::default();
        let scenario =
            HubScenario::from_assumptions("預設方案".to_string(), 8, &assumptions);

        assert_eq!(scenario.store_count, 8);
        assert_eq!(scenario.commission_rate, assumptions.default_commission_rate);
        assert_eq!(scenario.monthly_storage_fee, assumptions.default_storage_fee);
        assert_eq!(scenario.one_time_setup_cost, assumptions.default_setup_cost);
    }

    #[test]
    fn test_scenario_rejects_negative_setup_cost() {
        let scenario = HubScenario::new(
            "無效方案".to_string(),
            5,
            Decimal::from(5),
            Decimal::from(200),
            Decimal::from(-1),
        );

        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_scenario_rejects_commission_over_100() {
        let scenario = HubScenario::new(
            "無效方案".to_string(),
            5,
            Decimal::from(120),
            Decimal::from(200),
            Decimal::from(5000),
        );

        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_profile_monthly_cost() {
        let profile =
            LocationCostProfile::new("STORE-001".to_string(), Decimal::from(15), 2);

        assert_eq!(profile.monthly_cost(), Decimal::from(30));
    }
}
