use std::collections::HashMap;
use strum_macros::{Display, EnumString};
use crate::common::error::{ErrCode, IndicatorError};

/// Names of the derived columns a session can carry.
///
/// Serialized forms match the column labels used on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ColumnId {
    #[strum(serialize = "24H_MOVING_VOLUME")]
    VolumeMa,
    #[strum(serialize = "SMA")]
    BollMid,
    #[strum(serialize = "UPPER_BAND")]
    BollUpper,
    #[strum(serialize = "LOWER_BAND")]
    BollLower,
    #[strum(serialize = "RSI")]
    Rsi,
}

/// A computed column aligned index-for-index with its source series.
///
/// `None` marks positions with insufficient history.
#[derive(Debug, Clone)]
pub struct DerivedColumn {
    pub id: ColumnId,
    pub values: Vec<Option<f64>>,
}

impl DerivedColumn {
    pub fn new(id: ColumnId, values: Vec<Option<f64>>) -> Self {
        Self { id, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_all_undefined(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }

    pub fn last_defined(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

/// Derived columns keyed by id, all aligned to one series length
#[derive(Debug, Clone)]
pub struct ColumnSet {
    series_len: usize,
    columns: HashMap<ColumnId, DerivedColumn>,
}

impl ColumnSet {
    pub fn new(series_len: usize) -> Self {
        Self {
            series_len,
            columns: HashMap::new(),
        }
    }

    /// Attach a column, rejecting length mismatches
    pub fn insert(&mut self, column: DerivedColumn) -> Result<(), IndicatorError> {
        if column.len() != self.series_len {
            return Err(IndicatorError::new(
                format!(
                    "column {} has {} values, series has {} records",
                    column.id,
                    column.len(),
                    self.series_len
                ),
                ErrCode::ColumnNotAlign,
            ));
        }
        self.columns.insert(column.id, column);
        Ok(())
    }

    pub fn get(&self, id: ColumnId) -> Option<&DerivedColumn> {
        self.columns.get(&id)
    }

    pub fn contains(&self, id: ColumnId) -> bool {
        self.columns.contains_key(&id)
    }

    pub fn value_at(&self, id: ColumnId, index: usize) -> Option<f64> {
        self.columns.get(&id).and_then(|c| c.value_at(index))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
