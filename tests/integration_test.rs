//! 集成測試

use chrono::NaiveDate;
use dde_calc::{InventoryAssessor, SuggestionBasis};
use dde_core::*;
use dde_hub::{HubEvaluator, Priority, ViabilityRating};
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
}

#[test]
fn test_critical_store_assessment() {
    // 場景：最低 30、最高 50、現有 10 → 危急且需補貨

    // 1. 建立庫存記錄
    let record = InventoryRecord::new(
        "PROD-001".to_string(),
        "STORE-001".to_string(),
        Decimal::from(10),
        Decimal::from(30),
        Decimal::from(50),
    );

    // 2. 執行評估
    let assessment = InventoryAssessor::assess(&record, today()).unwrap();

    // 3. 驗證結果
    assert_eq!(assessment.stock_status, StockStatus::Critical);
    assert!(assessment.needs_restock);
    assert_eq!(
        assessment.restock_trigger,
        Some(RestockTrigger::StockCritical)
    );
}

#[test]
fn test_healthy_store_assessment() {
    // 場景：現有 40、最低 30、最高 50、理想 80% → 理想庫存 40、健康

    let record = InventoryRecord::new(
        "PROD-001".to_string(),
        "STORE-002".to_string(),
        Decimal::from(40),
        Decimal::from(30),
        Decimal::from(50),
    )
    .with_ideal_stock_percentage(Decimal::from(80));

    let assessment = InventoryAssessor::assess(&record, today()).unwrap();

    assert_eq!(assessment.ideal_stock, Decimal::from(40));
    assert_eq!(assessment.stock_status, StockStatus::Healthy);
    assert!(!assessment.needs_restock);
    assert_eq!(assessment.restock_trigger, None);
}

#[test]
fn test_stockout_projection_uses_ceiling() {
    // 場景：日均銷量 2.0、現有 10 → 5 天後斷貨（ceil，不是四捨五入）

    let record = InventoryRecord::new(
        "PROD-001".to_string(),
        "STORE-003".to_string(),
        Decimal::from(10),
        Decimal::from(5),
        Decimal::from(100),
    )
    .with_average_daily_sales(Decimal::from(2));

    let assessment = InventoryAssessor::assess(&record, today()).unwrap();

    assert_eq!(assessment.days_until_stockout, Some(5));
    assert_eq!(
        assessment.projected_stockout_date,
        Some(NaiveDate::from_ymd_opt(2025, 11, 15).unwrap())
    );

    // 7 / 2 = 3.5 → 4 天，非 3
    let mut record = record;
    record.current_stock = Decimal::from(7);
    let assessment = InventoryAssessor::assess(&record, today()).unwrap();
    assert_eq!(assessment.days_until_stockout, Some(4));
}

#[test]
fn test_full_assessment_flow_with_restock_due() {
    // 完整流程：危急 + 補貨日到期 → 緊急觸發、建議補貨量、斷貨預測一次算齊

    let record = InventoryRecord::new(
        "PROD-002".to_string(),
        "STORE-001".to_string(),
        Decimal::from(10),
        Decimal::from(30),
        Decimal::from(50),
    )
    .with_last_restock_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())
    .with_restock_cycle_days(14)
    .with_average_daily_sales(Decimal::from(2));

    let assessment = InventoryAssessor::assess(&record, today()).unwrap();

    // 下次補貨日 10/15 已過 → 緊急
    assert_eq!(
        assessment.next_restock_date,
        Some(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap())
    );
    assert_eq!(assessment.stock_status, StockStatus::Critical);
    assert_eq!(assessment.restock_trigger, Some(RestockTrigger::Emergency));

    // 建議補貨量 = max(40 - 10, 2 × 14, 0) = 30（缺口勝出）
    assert_eq!(assessment.suggested_restock_quantity, Decimal::from(30));
    assert_eq!(assessment.suggestion_basis, SuggestionBasis::DeficitFromIdeal);

    // 斷貨預測 ceil(10 / 2) = 5 天
    assert_eq!(assessment.days_until_stockout, Some(5));
}

#[test]
fn test_batch_assessment_parallel_consistency() {
    // 批次評估與逐筆評估結果一致

    let records: Vec<_> = (0..50)
        .map(|i| {
            InventoryRecord::new(
                format!("PROD-{:03}", i),
                "STORE-001".to_string(),
                Decimal::from(i),
                Decimal::from(30),
                Decimal::from(50),
            )
            .with_average_daily_sales(Decimal::from(2))
        })
        .collect();

    let batch = InventoryAssessor::assess_batch(&records, today());

    assert_eq!(batch.len(), 50);
    for (record, result) in records.iter().zip(&batch) {
        let single = InventoryAssessor::assess(record, today()).unwrap();
        let batched = result.as_ref().unwrap();
        assert_eq!(single.stock_status, batched.stock_status);
        assert_eq!(single.needs_restock, batched.needs_restock);
        assert_eq!(
            single.suggested_restock_quantity,
            batched.suggested_restock_quantity
        );
    }
}

#[test]
fn test_small_hub_scenario_rejected() {
    // 場景：3 家門市、佣金 5%、倉儲費 200、建置 5000、預設假設
    // → 目前成本 90、節省為負 → 不可行、評級不佳

    let scenario = HubScenario::new(
        "小型集貨中心".to_string(),
        3,
        Decimal::from(5),
        Decimal::from(200),
        Decimal::from(5000),
    );

    let evaluation = HubEvaluator::evaluate(
        &scenario,
        &HubCostAssumptions::default(),
        &HubViabilityCriteria::default(),
    )
    .unwrap();

    assert_eq!(
        evaluation.economics.current_monthly_cost,
        Decimal::from(90)
    );
    assert!(evaluation.economics.monthly_savings < Decimal::from(100));
    assert!(!evaluation.economics.is_economical);
    assert_eq!(evaluation.rating.rating, ViabilityRating::Poor);
    assert!(!evaluation.recommendation.should_approve);
    assert_eq!(evaluation.recommendation.priority, Priority::Low);
}

#[test]
fn test_twelve_store_hub_arithmetic_locked() {
    // 場景：12 家門市、預設假設 → 公式鏈逐項鎖定（回歸保護）

    let scenario = HubScenario::new(
        "十二店方案".to_string(),
        12,
        Decimal::from(5),
        Decimal::from(200),
        Decimal::from(5000),
    );

    let evaluation = HubEvaluator::evaluate(
        &scenario,
        &HubCostAssumptions::default(),
        &HubViabilityCriteria::default(),
    )
    .unwrap();

    let economics = &evaluation.economics;
    // 目前成本 12 × 2 × 15 = 360
    assert_eq!(economics.current_monthly_cost, Decimal::from(360));
    // 整批 4 × (12 × 15 × 0.6) = 432
    assert_eq!(economics.bulk_shipment_cost, Decimal::from(432));
    // 在地配送 12 × 2 × 5 = 120
    assert_eq!(economics.local_delivery_cost, Decimal::from(120));
    // 佣金 12 × 2 × 500 × 5% = 600
    assert_eq!(economics.hub_commission, Decimal::from(600));
    // 導入後 432 + 120 + 600 + 200 = 1352，節省 360 - 1352 = -992
    assert_eq!(economics.projected_monthly_cost, Decimal::from(1352));
    assert_eq!(economics.monthly_savings, Decimal::from(-992));
    assert_eq!(economics.break_even_months, None);
    assert_eq!(economics.roi_12_months, Some(Decimal::new(-23808, 2)));
    assert!(!economics.is_economical);
    assert_eq!(evaluation.rating.rating, ViabilityRating::Poor);

    // 四個構面各貢獻一句分類陳述
    assert_eq!(
        evaluation.recommendation.reasons.len()
            + evaluation.recommendation.concerns.len(),
        4
    );
}

#[test]
fn test_profitable_hub_approved() {
    // 高折扣、高頻率、零佣金下集貨中心可行

    let assumptions = HubCostAssumptions {
        shipments_per_store_per_month: 4,
        bulk_discount_rate: Decimal::new(8, 1), // 0.8
        ..HubCostAssumptions::default()
    };
    let scenario = HubScenario::new(
        "北區集貨中心".to_string(),
        10,
        Decimal::ZERO,
        Decimal::from(100),
        Decimal::from(1000),
    );

    let evaluation = HubEvaluator::evaluate(
        &scenario,
        &assumptions,
        &HubViabilityCriteria::default(),
    )
    .unwrap();

    // 節省 600 - 420 = 180、回本 6 個月
    assert_eq!(evaluation.economics.monthly_savings, Decimal::from(180));
    assert_eq!(evaluation.economics.break_even_months, Some(6));
    assert!(evaluation.economics.is_economical);

    // 門市數與回本達理想、節省未達 → 良好、建議核准
    assert_eq!(evaluation.rating.rating, ViabilityRating::Good);
    assert!(evaluation.recommendation.should_approve);
    assert_eq!(evaluation.recommendation.priority, Priority::Medium);
    assert_eq!(evaluation.recommendation.reasons.len(), 3);
    assert_eq!(evaluation.recommendation.concerns.len(), 1);
}

#[test]
fn test_scenario_comparison_picks_best() {
    // 方案比較：核准者中取每月節省最高

    let assumptions = HubCostAssumptions {
        shipments_per_store_per_month: 4,
        bulk_discount_rate: Decimal::new(8, 1),
        ..HubCostAssumptions::default()
    };
    let criteria = HubViabilityCriteria::default();

    let scenarios = vec![
        HubScenario::new(
            "北區".to_string(),
            10,
            Decimal::ZERO,
            Decimal::from(100),
            Decimal::from(1000),
        ),
        HubScenario::new(
            "南區".to_string(),
            12,
            Decimal::ZERO,
            Decimal::from(100),
            Decimal::from(1000),
        ),
        HubScenario::new(
            "東區".to_string(),
            3,
            Decimal::ZERO,
            Decimal::from(100),
            Decimal::from(1000),
        ),
    ];

    let evaluations: Vec<_> = HubEvaluator::compare(&scenarios, &assumptions, &criteria)
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()
        .unwrap();

    let best = HubEvaluator::pick_best(&evaluations).unwrap();
    assert_eq!(best.scenario_name, "南區");
    assert_eq!(best.economics.monthly_savings, Decimal::from(236));
}

#[test]
fn test_validation_rejected_before_computation() {
    // 輸入矛盾 → 驗證錯誤，而非算出不可行的結果

    let record = InventoryRecord::new(
        "PROD-001".to_string(),
        "STORE-001".to_string(),
        Decimal::from(10),
        Decimal::from(50),
        Decimal::from(30), // 最高 < 最低
    );
    assert!(InventoryAssessor::assess(&record, today()).is_err());

    let scenario = HubScenario::new(
        "無效方案".to_string(),
        5,
        Decimal::from(5),
        Decimal::from(200),
        Decimal::from(-100), // 建置成本為負
    );
    let result = HubEvaluator::evaluate(
        &scenario,
        &HubCostAssumptions::default(),
        &HubViabilityCriteria::default(),
    );
    assert!(result.is_err());

    // 「算出來但不可行」與「驗證失敗」是兩種不同回傳
    let poor_but_valid = HubScenario::new(
        "不賺錢".to_string(),
        3,
        Decimal::from(5),
        Decimal::from(200),
        Decimal::from(5000),
    );
    let evaluation = HubEvaluator::evaluate(
        &poor_but_valid,
        &HubCostAssumptions::default(),
        &HubViabilityCriteria::default(),
    )
    .unwrap();
    assert!(!evaluation.economics.is_economical);
}
