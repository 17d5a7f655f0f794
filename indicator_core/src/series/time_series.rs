use std::ops::Index;
use super::candle::Candle;
use crate::common::error::{ErrCode, IndicatorError};

/// Ordered, timestamp-indexed OHLCV series.
///
/// Immutable once constructed; transforms read it and attach derived
/// columns elsewhere. Loading new data means building a new series.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    lst: Vec<Candle>,
}

impl TimeSeries {
    /// Build a series, rejecting out-of-order or duplicate timestamps
    pub fn new(lst: Vec<Candle>) -> Result<Self, IndicatorError> {
        for pair in lst.windows(2) {
            if pair[1].time == pair[0].time {
                return Err(IndicatorError::new(
                    format!("duplicate timestamp {}", pair[1].time),
                    ErrCode::KlTimeInconsistent,
                ));
            }
            if pair[1].time < pair[0].time {
                return Err(IndicatorError::new(
                    format!(
                        "timestamps not increasing: {} after {}",
                        pair[1].time, pair[0].time
                    ),
                    ErrCode::KlNotMonotonous,
                ));
            }
        }
        Ok(Self { lst })
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.lst.get(index)
    }

    pub fn first(&self) -> Option<&Candle> {
        self.lst.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.lst.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candle> {
        self.lst.iter()
    }

    /// Close prices as a plain column
    pub fn closes(&self) -> Vec<f64> {
        self.lst.iter().map(|c| c.close).collect()
    }

    /// Traded volumes as a plain column
    pub fn volumes(&self) -> Vec<f64> {
        self.lst.iter().map(|c| c.volume).collect()
    }
}

// Array-like access, aligned with derived column positions
impl Index<usize> for TimeSeries {
    type Output = Candle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}
