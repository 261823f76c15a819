use chrono::NaiveDate;
use log::warn;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::{Direction, PeriodMetrics, ReturnOutcome, ReturnPoint, ReturnSeries};
use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::series::{has_sufficient_points, Valued};

const HUNDRED: Decimal = dec!(100);
const DAYS_PER_YEAR_DECIMAL: Decimal = dec!(365.25);

/// Rebases a windowed series into cumulative percentage returns.
///
/// `return[i] = (value[i] / value[0] - 1) * 100`. A zero base is replaced by
/// one so degenerate input never produces a division error. Points whose
/// return does not fit in a `Decimal` are dropped with a warning; if fewer
/// than two points survive the outcome is insufficient data.
pub fn cumulative_returns<T: Valued>(window: &[T]) -> ReturnOutcome {
    let Some(first) = window.first() else {
        return ReturnOutcome::InsufficientData { available: 0 };
    };
    if !has_sufficient_points(window) {
        return ReturnOutcome::InsufficientData {
            available: window.len(),
        };
    }

    let base = safe_base(first.value(), first.date());
    let points: Vec<ReturnPoint> = window
        .iter()
        .filter_map(|point| match rebase(point.value(), base) {
            Some(value) => Some(ReturnPoint {
                date: point.date(),
                value,
            }),
            None => {
                warn!(
                    "Return on {} overflows against base {}; dropping point.",
                    point.date(),
                    base
                );
                None
            }
        })
        .collect();

    let (Some(start), Some(end)) = (points.first(), points.last()) else {
        return ReturnOutcome::InsufficientData { available: 0 };
    };
    if !has_sufficient_points(&points) {
        return ReturnOutcome::InsufficientData {
            available: points.len(),
        };
    }

    let (start_date, end_date, total) = (start.date, end.date, end.value);
    let metrics = PeriodMetrics {
        annualized_return: annualized_return(start_date, end_date, total),
        max_drawdown: max_drawdown(window),
    };

    ReturnSeries {
        points,
        start_date,
        end_date,
        period_return: total,
        direction: Direction::from_return(total),
        metrics,
    }
    .into()
}

impl From<ReturnSeries> for ReturnOutcome {
    fn from(series: ReturnSeries) -> Self {
        ReturnOutcome::Available(series)
    }
}

/// Return in percent between two values, independent of intermediate points.
///
/// `None` when the return does not fit in a `Decimal`.
pub fn period_return(first: Decimal, last: Decimal) -> Option<Decimal> {
    let base = if first.is_zero() { Decimal::ONE } else { first };
    rebase(last, base)
}

/// Formats a percentage for header text: `+10.00%`, `-3.25%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        '-'
    } else {
        '+'
    };
    format!("{}{:.2}%", sign, rounded.abs())
}

fn rebase(value: Decimal, base: Decimal) -> Option<Decimal> {
    value
        .checked_div(base)?
        .checked_sub(Decimal::ONE)?
        .checked_mul(HUNDRED)
        .map(|pct| pct.round_dp(DECIMAL_PRECISION))
}

fn safe_base(value: Decimal, date: NaiveDate) -> Decimal {
    if value.is_zero() {
        warn!(
            "Series starting {} has a zero base value; rebasing against 1 instead.",
            date
        );
        Decimal::ONE
    } else {
        value
    }
}

/// Compounds a percentage return to a yearly rate once the window spans at
/// least a year. Losses of 100% or more are capped at -100%.
fn annualized_return(start_date: NaiveDate, end_date: NaiveDate, total_pct: Decimal) -> Decimal {
    let total = total_pct / HUNDRED;
    if total <= dec!(-1) {
        return dec!(-100);
    }

    let days = (end_date - start_date).num_days();
    if days <= 0 {
        return total_pct;
    }

    let years = Decimal::from(days) / DAYS_PER_YEAR_DECIMAL;
    if years < Decimal::ONE {
        return total_pct;
    }

    let base = Decimal::ONE + total;
    if base <= Decimal::ZERO {
        return dec!(-100);
    }

    let exponent = Decimal::ONE / years;
    let compounded = base
        .checked_powd(exponent)
        .and_then(|growth| growth.checked_sub(Decimal::ONE))
        .and_then(|rate| rate.checked_mul(HUNDRED));
    match compounded {
        Some(rate) => rate.round_dp(DECIMAL_PRECISION),
        None => {
            warn!(
                "Annualizing {}% from {} to {} overflowed; using the period return.",
                total_pct, start_date, end_date
            );
            total_pct
        }
    }
}

fn max_drawdown<T: Valued>(window: &[T]) -> Decimal {
    let mut peak: Option<Decimal> = None;
    let mut worst = Decimal::ZERO;

    for point in window {
        let value = point.value();
        let current_peak = match peak {
            Some(p) if p >= value => p,
            _ => {
                peak = Some(value);
                value
            }
        };
        if current_peak > Decimal::ZERO {
            let drawdown = current_peak
                .checked_sub(value)
                .and_then(|drop| drop.checked_div(current_peak))
                .and_then(|ratio| ratio.checked_mul(HUNDRED));
            if let Some(drawdown) = drawdown {
                worst = worst.max(drawdown);
            }
        }
    }

    worst.round_dp(DECIMAL_PRECISION)
}
