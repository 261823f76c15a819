use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A point that sits at a calendar date on an ordered series.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// A dated point that carries the value used for return and indicator math.
pub trait Valued: Dated {
    fn value(&self) -> Decimal;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

impl ValuePoint {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

impl Dated for ValuePoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Valued for ValuePoint {
    fn value(&self) -> Decimal {
        self.value
    }
}

/// Checks that dates are strictly increasing across the slice.
pub fn validate_ordering<T: Dated>(points: &[T]) -> Result<()> {
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].date() <= pair[0].date() {
            return Err(ValidationError::UnorderedSeries {
                index: index + 1,
                date: pair[1].date(),
            }
            .into());
        }
    }
    Ok(())
}

/// An owned value series whose dates are known to be strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueSeries {
    points: Vec<ValuePoint>,
}

impl ValueSeries {
    /// Builds a series, rejecting out-of-order or duplicate dates.
    pub fn new(points: Vec<ValuePoint>) -> Result<Self> {
        validate_ordering(&points)?;
        Ok(Self { points })
    }

    /// Builds a series from arbitrary points by sorting on date.
    /// Later duplicates of a date replace earlier ones.
    pub fn from_unsorted(mut points: Vec<ValuePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        let mut deduped: Vec<ValuePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Self { points: deduped }
    }

    pub fn points(&self) -> &[ValuePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ValuePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ValuePoint> {
        self.points.last()
    }

    pub fn into_points(self) -> Vec<ValuePoint> {
        self.points
    }
}

impl<'de> Deserialize<'de> for ValueSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<ValuePoint>::deserialize(deserializer)?;
        ValueSeries::new(points).map_err(serde::de::Error::custom)
    }
}

impl AsRef<[ValuePoint]> for ValueSeries {
    fn as_ref(&self) -> &[ValuePoint] {
        &self.points
    }
}
