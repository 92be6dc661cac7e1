// ==========================================
// 库存可用性报价系统 - 日期投影引擎
// ==========================================
// 职责: 把限制性提前期 + 固定处理/运输天数换算为具体日期
// 红线: 纯日历日加法，不做工作日/节假日调整
// ==========================================

use chrono::{Duration, NaiveDate};

/// 日期投影结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateProjection {
    /// 最早发货日期
    pub earliest_ship_date: NaiveDate,
    /// 预计送达日期
    pub estimated_delivery_date: NaiveDate,
}

/// 日期投影引擎
///
/// `today` 由调用方显式注入，引擎内部不读取环境时间。
pub struct DateProjector;

impl DateProjector {
    /// 投影发货/送达日期
    ///
    /// - earliest_ship_date = today + limiting_lead_time_days + handling_days
    /// - estimated_delivery_date = earliest_ship_date + shipping_days
    ///
    /// 可立即满足时 limiting_lead_time_days 为 0，公式退化为
    /// today + handling_days。
    pub fn project(
        today: NaiveDate,
        limiting_lead_time_days: i64,
        handling_days: u32,
        shipping_days: u32,
    ) -> DateProjection {
        let earliest_ship_date =
            today + Duration::days(limiting_lead_time_days + i64::from(handling_days));
        let estimated_delivery_date = earliest_ship_date + Duration::days(i64::from(shipping_days));

        DateProjection {
            earliest_ship_date,
            estimated_delivery_date,
        }
    }

    /// 单个短缺组件的预计解除日期
    ///
    /// 只看该组件自身的提前期，与其它组件无关。
    pub fn component_available_on(today: NaiveDate, lead_time_days: i64) -> NaiveDate {
        today + Duration::days(lead_time_days)
    }
}
