// ==========================================
// 可用性 API 端到端测试
// ==========================================
// 职责: 经 SQLite 仓储验证 quote_availability 的完整契约
// 场景: 订单行 → BOM 展开 → 短缺评估 → 日期投影 → 解释文本
// ==========================================


use chrono::NaiveDate;
use std::error::Error;
use std::sync::Arc;

use inventory_availability::api::{
    ApiError, AvailabilityApi, QuoteOptions, UnknownProductPolicy,
};
use inventory_availability::domain::OrderLine;
use inventory_availability::repository::AvailabilityRepository;
use tempfile::NamedTempFile;

use crate::test_helpers::{
    create_test_db, insert_bom, insert_component, insert_product, open_test_connection,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn options_on(today: NaiveDate) -> QuoteOptions {
    QuoteOptions {
        today: Some(today),
        ..QuoteOptions::default()
    }
}

/// 建库并灌入场景数据，返回 (临时文件, API)
///
/// seed 回调拿到已初始化 schema 的连接。
fn setup_api(
    seed: impl Fn(&rusqlite::Connection) -> Result<(), Box<dyn Error>>,
) -> Result<(NamedTempFile, AvailabilityApi<AvailabilityRepository>), Box<dyn Error>> {
    let (temp_file, db_path) = create_test_db()?;

    let conn = open_test_connection(&db_path)?;
    {
        let guard = conn.lock().unwrap();
        seed(&guard)?;
    }

    let api = AvailabilityApi::new(Arc::new(AvailabilityRepository::new(conn)));
    Ok((temp_file, api))
}

// ==========================================
// 场景 A: 单产品双组件，一个组件断货
// ==========================================
#[test]
fn test_scenario_single_product_one_component_short() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "X", 10, 3)?;
        insert_component(conn, 2, "Y", 0, 7)?;
        insert_bom(conn, 1, 1, 2)?;
        insert_bom(conn, 1, 2, 1)?;
        Ok(())
    })?;

    let lines = vec![OrderLine::new(1, 1)?];
    let quote = api.quote_availability(&lines, options_on(date(2024, 1, 1)))?;

    assert!(!quote.can_fulfill_now);
    assert_eq!(quote.earliest_ship_date, date(2024, 1, 10));
    assert_eq!(quote.estimated_delivery_date, date(2024, 1, 15));

    // X 短缺为 0，不进入瓶颈；Y 短缺 1
    assert_eq!(quote.bottleneck_components.len(), 1);
    let bottleneck = &quote.bottleneck_components[0];
    assert_eq!(bottleneck.component_id, 2);
    assert_eq!(bottleneck.component_name, "Y");
    assert_eq!(bottleneck.required_qty, 1);
    assert_eq!(bottleneck.quantity_on_hand, 0);
    assert_eq!(bottleneck.shortage, 1);
    assert_eq!(bottleneck.lead_time_days, 7);
    assert_eq!(bottleneck.available_on, date(2024, 1, 8));

    assert_eq!(
        quote.explanation,
        "Order is short on Y (need 1, have 0). Lead time is 7 days; earliest ship date is 2024-01-10."
    );
    Ok(())
}

// ==========================================
// 场景 B: 产品无任何 BOM 条目
// ==========================================
#[test]
fn test_scenario_product_without_bom_is_buildable() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Bare Kit")?;
        Ok(())
    })?;

    let lines = vec![OrderLine::new(1, 50)?];
    let quote = api.quote_availability(&lines, options_on(date(2024, 1, 1)))?;

    assert!(quote.can_fulfill_now);
    assert!(quote.bottleneck_components.is_empty());
    assert_eq!(quote.earliest_ship_date, date(2024, 1, 3));
    assert_eq!(quote.estimated_delivery_date, date(2024, 1, 8));
    assert_eq!(
        quote.explanation,
        "No BOM rows found for the requested products; assuming buildable now."
    );
    Ok(())
}

// ==========================================
// 场景 C: 两行共用组件，合并需求才超库存
// ==========================================
#[test]
fn test_scenario_aggregate_demand_exceeds_stock() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_product(conn, 2, "Apex Kit")?;
        insert_component(conn, 1, "Shared Bolt", 10, 5)?;
        insert_bom(conn, 1, 1, 3)?;
        insert_bom(conn, 2, 1, 4)?;
        Ok(())
    })?;

    // 单行需求 6 或 8 都不超过 10；合并后 14 超出 4
    let lines = vec![OrderLine::new(1, 2)?, OrderLine::new(2, 2)?];
    let quote = api.quote_availability(&lines, options_on(date(2024, 1, 1)))?;

    assert!(!quote.can_fulfill_now);
    assert_eq!(quote.bottleneck_components.len(), 1);
    assert_eq!(quote.bottleneck_components[0].required_qty, 14);
    assert_eq!(quote.bottleneck_components[0].shortage, 4);
    Ok(())
}

// ==========================================
// 场景 D: 空订单行
// ==========================================
#[test]
fn test_scenario_empty_lines_invalid_input() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|_conn| Ok(()))?;

    let result = api.quote_availability(&[], options_on(date(2024, 1, 1)));
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    Ok(())
}

// ==========================================
// 场景 E: 短缺相同、提前期不同的双瓶颈
// ==========================================
#[test]
fn test_scenario_equal_shortage_larger_lead_named_first() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "Fast Part", 0, 3)?;
        insert_component(conn, 2, "Slow Part", 0, 14)?;
        insert_bom(conn, 1, 1, 1)?;
        insert_bom(conn, 1, 2, 1)?;
        Ok(())
    })?;

    let lines = vec![OrderLine::new(1, 5)?];
    let quote = api.quote_availability(&lines, options_on(date(2024, 1, 1)))?;

    assert!(!quote.can_fulfill_now);
    assert_eq!(quote.bottleneck_components.len(), 2);

    // 短缺都是 5：提前期大的排前并被点名
    assert_eq!(quote.bottleneck_components[0].component_name, "Slow Part");
    assert_eq!(quote.bottleneck_components[1].component_name, "Fast Part");

    // 发货日期由最慢短缺组件决定: 1/1 + 14 + 2 = 1/17
    assert_eq!(quote.earliest_ship_date, date(2024, 1, 17));
    assert_eq!(
        quote.explanation,
        "Order cannot be fulfilled immediately; 2 components are short. The bottleneck is Slow Part (short 5, lead 14 days), so earliest ship date is 2024-01-17."
    );
    Ok(())
}

// ==========================================
// 性质: 幂等 / 行序无关 / 交换格式
// ==========================================

#[test]
fn test_identical_calls_yield_byte_identical_output() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "X", 1, 9)?;
        insert_bom(conn, 1, 1, 4)?;
        Ok(())
    })?;

    let lines = vec![OrderLine::new(1, 3)?];
    let options = options_on(date(2024, 6, 1));

    let first = api.quote_availability(&lines, options)?;
    let second = api.quote_availability(&lines, options)?;

    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    Ok(())
}

#[test]
fn test_line_permutation_does_not_change_quote() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_product(conn, 2, "Apex Kit")?;
        insert_product(conn, 3, "Orion Pack")?;
        insert_component(conn, 1, "A", 5, 2)?;
        insert_component(conn, 2, "B", 0, 11)?;
        insert_bom(conn, 1, 1, 1)?;
        insert_bom(conn, 2, 1, 2)?;
        insert_bom(conn, 2, 2, 1)?;
        insert_bom(conn, 3, 2, 3)?;
        Ok(())
    })?;

    let forward = vec![
        OrderLine::new(1, 2)?,
        OrderLine::new(2, 1)?,
        OrderLine::new(3, 4)?,
    ];
    let backward = vec![
        OrderLine::new(3, 4)?,
        OrderLine::new(2, 1)?,
        OrderLine::new(1, 2)?,
    ];
    let options = options_on(date(2024, 2, 10));

    assert_eq!(
        api.quote_availability(&forward, options)?,
        api.quote_availability(&backward, options)?
    );
    Ok(())
}

#[test]
fn test_quote_serializes_iso_dates() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "X", 0, 7)?;
        insert_bom(conn, 1, 1, 1)?;
        Ok(())
    })?;

    let quote =
        api.quote_availability(&[OrderLine::new(1, 1)?], options_on(date(2024, 1, 1)))?;
    let value = serde_json::to_value(&quote)?;

    assert_eq!(value["earliest_ship_date"], "2024-01-10");
    assert_eq!(value["estimated_delivery_date"], "2024-01-15");
    assert_eq!(value["bottleneck_components"][0]["available_on"], "2024-01-08");
    Ok(())
}

// ==========================================
// 未知产品策略
// ==========================================

#[test]
fn test_unknown_product_policy_lenient_vs_strict() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "X", 100, 3)?;
        insert_bom(conn, 1, 1, 1)?;
        Ok(())
    })?;

    // 产品 77 在库中不存在
    let lines = vec![OrderLine::new(1, 1)?, OrderLine::new(77, 1)?];

    // 宽松（默认）：未知产品静默不贡献需求
    let lenient = api.quote_availability(&lines, options_on(date(2024, 1, 1)))?;
    assert!(lenient.can_fulfill_now);
    assert_eq!(
        lenient.explanation,
        "All required components are available on hand; the order can be fulfilled now."
    );

    // 严格：拒绝并点名
    let strict = api.quote_availability(
        &lines,
        QuoteOptions {
            unknown_product_policy: UnknownProductPolicy::Strict,
            ..options_on(date(2024, 1, 1))
        },
    );
    match strict {
        Err(ApiError::InvalidInput(msg)) => assert!(msg.contains("77")),
        other => panic!("期望 InvalidInput, 实际 {:?}", other),
    }
    Ok(())
}

// ==========================================
// 现货全覆盖
// ==========================================

#[test]
fn test_fully_stocked_order_ships_now() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "X", 100, 3)?;
        insert_component(conn, 2, "Y", 100, 21)?;
        insert_bom(conn, 1, 1, 2)?;
        insert_bom(conn, 1, 2, 1)?;
        Ok(())
    })?;

    let quote =
        api.quote_availability(&[OrderLine::new(1, 10)?], options_on(date(2024, 1, 1)))?;

    assert!(quote.can_fulfill_now);
    assert!(quote.bottleneck_components.is_empty());
    assert_eq!(quote.earliest_ship_date, date(2024, 1, 3));
    assert_eq!(quote.estimated_delivery_date, date(2024, 1, 8));
    assert_eq!(
        quote.explanation,
        "All required components are available on hand; the order can be fulfilled now."
    );
    Ok(())
}

// ==========================================
// 自定义处理/运输天数
// ==========================================

#[test]
fn test_custom_offsets_shift_dates() -> Result<(), Box<dyn Error>> {
    let (_db, api) = setup_api(|conn| {
        insert_product(conn, 1, "Nova Widget")?;
        insert_component(conn, 1, "X", 0, 10)?;
        insert_bom(conn, 1, 1, 1)?;
        Ok(())
    })?;

    let quote = api.quote_availability(
        &[OrderLine::new(1, 1)?],
        QuoteOptions {
            handling_days: 0,
            shipping_days: 1,
            ..options_on(date(2024, 1, 1))
        },
    )?;

    assert_eq!(quote.earliest_ship_date, date(2024, 1, 11));
    assert_eq!(quote.estimated_delivery_date, date(2024, 1, 12));
    Ok(())
}
