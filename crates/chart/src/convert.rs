use log::warn;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use pulsefolio_core::performance::ReturnSeries;
use pulsefolio_core::series::Valued;

use crate::chart_model::ChartPoint;

pub(crate) fn to_f64(value: Decimal) -> Option<f64> {
    let converted = value.to_f64();
    if converted.is_none() {
        warn!("Dropping chart value {} that has no f64 representation", value);
    }
    converted
}

pub fn return_points(series: &ReturnSeries) -> Vec<ChartPoint> {
    series
        .points
        .iter()
        .filter_map(|p| {
            to_f64(p.value).map(|value| ChartPoint {
                time: p.date,
                value,
            })
        })
        .collect()
}

/// Converts any dated value history into chart points.
pub fn value_points<T: Valued>(values: &[T]) -> Vec<ChartPoint> {
    values
        .iter()
        .filter_map(|p| {
            to_f64(p.value()).map(|value| ChartPoint {
                time: p.date(),
                value,
            })
        })
        .collect()
}
