//! 集貨中心方案比較示例

use dde::dde_core::{HubCostAssumptions, HubScenario, HubViabilityCriteria};
use dde::dde_hub::HubEvaluator;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 集貨中心方案比較示例 ===\n");

    let assumptions = HubCostAssumptions {
        shipments_per_store_per_month: 4,
        bulk_discount_rate: Decimal::new(8, 1), // 0.8
        ..HubCostAssumptions::default()
    };
    let criteria = HubViabilityCriteria::default();

    let scenarios = vec![
        HubScenario::new(
            "北區集貨中心".to_string(),
            10,
            Decimal::ZERO,
            Decimal::from(100),
            Decimal::from(1000),
        ),
        HubScenario::new(
            "南區集貨中心".to_string(),
            12,
            Decimal::ZERO,
            Decimal::from(100),
            Decimal::from(1000),
        ),
        HubScenario::new(
            "東區集貨中心".to_string(),
            3,
            Decimal::from(5),
            Decimal::from(200),
            Decimal::from(5000),
        ),
    ];

    let evaluations: Vec<_> = HubEvaluator::compare(&scenarios, &assumptions, &criteria)
        .into_iter()
        .filter_map(|result| match result {
            Ok(evaluation) => Some(evaluation),
            Err(error) => {
                println!("方案驗證失敗: {}\n", error);
                None
            }
        })
        .collect();

    for evaluation in &evaluations {
        println!("方案: {}", evaluation.scenario_name);
        println!(
            "  目前每月成本: {} → 導入後: {}",
            evaluation.economics.current_monthly_cost,
            evaluation.economics.projected_monthly_cost
        );
        println!("  每月節省: {}", evaluation.economics.monthly_savings);
        if let Some(months) = evaluation.economics.break_even_months {
            println!("  回本月數: {}", months);
        }
        println!(
            "  評級: {} ({})",
            evaluation.rating.label, evaluation.rating.rating
        );
        for reason in &evaluation.recommendation.reasons {
            println!("  + {}", reason);
        }
        for concern in &evaluation.recommendation.concerns {
            println!("  - {}", concern);
        }
        println!();
    }

    match HubEvaluator::pick_best(&evaluations) {
        Some(best) => println!("最佳方案: {}", best.scenario_name),
        None => println!("沒有建議核准的方案"),
    }

    Ok(())
}
