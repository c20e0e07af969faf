use crate::{DailySummary, HourlyReading};
use chrono::NaiveDate;
use std::collections::HashMap;

/// 日均值的固定除数
pub const HOURS_PER_DAY: f64 = 24.0;

/// 单日累加器
#[derive(Debug, Clone, Copy)]
struct DayAccumulator {
    minimum: f64,
    maximum: f64,
    sum: f64,
}

impl DayAccumulator {
    fn new(value: f64) -> Self {
        Self {
            minimum: value,
            maximum: value,
            sum: value,
        }
    }

    fn push(&mut self, value: f64) {
        self.minimum = self.minimum.min(value);
        self.maximum = self.maximum.max(value);
        self.sum += value;
    }

    fn finish(self, date: NaiveDate) -> DailySummary {
        DailySummary {
            date,
            minimum: self.minimum,
            maximum: self.maximum,
            sum: self.sum,
            average: self.sum / HOURS_PER_DAY,
        }
    }
}

/// 按日历日汇总读数
///
/// 每个出现过的日期输出一条汇总，顺序与该日期首次出现的顺序一致。
/// 平均值固定为 `sum / 24`，与当天实际读数条数无关。
pub fn aggregate_by_day(readings: &[HourlyReading]) -> Vec<DailySummary> {
    let mut order: Vec<(NaiveDate, DayAccumulator)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for reading in readings {
        let date = reading.date();
        match index.get(&date) {
            Some(&slot) => order[slot].1.push(reading.kilo_watt),
            None => {
                index.insert(date, order.len());
                order.push((date, DayAccumulator::new(reading.kilo_watt)));
            }
        }
    }

    order
        .into_iter()
        .map(|(date, acc)| acc.finish(date))
        .collect()
}
