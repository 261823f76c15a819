use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::indicators::IndicatorSummary;
use crate::performance::ReturnOutcome;
use crate::series::{validate_ordering, Dated, Period, Valued};

/// One daily closing rate of a currency pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FxHistoryPoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl Dated for FxHistoryPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Valued for FxHistoryPoint {
    fn value(&self) -> Decimal {
        self.close
    }
}

/// Closing-rate history of one currency pair, ordered by date.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxHistory {
    pub pair: String,
    points: Vec<FxHistoryPoint>,
}

impl FxHistory {
    pub fn new(pair: impl Into<String>, points: Vec<FxHistoryPoint>) -> Result<Self> {
        validate_ordering(&points)?;
        Ok(Self {
            pair: pair.into(),
            points,
        })
    }

    pub fn points(&self) -> &[FxHistoryPoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&FxHistoryPoint> {
        self.points.last()
    }

    /// Splits the pair label into (base, quote) currencies.
    pub fn currencies(&self) -> (String, String) {
        parse_fx_pair(&self.pair)
    }
}

impl<'de> Deserialize<'de> for FxHistory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawFxHistory {
            pair: String,
            points: Vec<FxHistoryPoint>,
        }

        let raw = RawFxHistory::deserialize(deserializer)?;
        FxHistory::new(raw.pair, raw.points).map_err(serde::de::Error::custom)
    }
}

/// Parses a pair label into (base, quote).
/// Supports:
/// - Slash: "USD/TWD" -> ("USD", "TWD")
/// - Colon: "USD:TWD" -> ("USD", "TWD")
/// - Concatenated: "USDTWD" -> ("USD", "TWD")
/// - Yahoo: "USDTWD=X" -> ("USD", "TWD")
pub fn parse_fx_pair(key: &str) -> (String, String) {
    let key = key.trim().strip_prefix("FX:").unwrap_or(key.trim());
    if let Some((base, quote)) = key.split_once('/').or_else(|| key.split_once(':')) {
        return (base.to_uppercase(), quote.to_uppercase());
    }
    let symbol = key.strip_suffix("=X").unwrap_or(key);
    if symbol.len() >= 6 && symbol.is_char_boundary(3) && symbol.is_char_boundary(6) {
        (symbol[..3].to_uppercase(), symbol[3..6].to_uppercase())
    } else {
        (symbol.to_uppercase(), String::new())
    }
}

/// Currency-exposure view of a pair over a period.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxTrend {
    pub pair: String,
    pub period: Period,
    pub latest: Option<FxHistoryPoint>,
    pub returns: ReturnOutcome,
    pub indicators: IndicatorSummary,
}
