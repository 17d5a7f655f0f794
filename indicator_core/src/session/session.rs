use super::cursor::{resolve_cursor, DisplayValues};
use crate::common::{
    diagnostic::Diagnostic,
    error::{ErrCode, IndicatorError},
};
use crate::config::indicator_config::IndicatorConfig;
use crate::math::{boll, rsi, volume};
use crate::series::{
    derived::{ColumnId, ColumnSet},
    time_series::TimeSeries,
};

// Display order of derived columns in annotations and summaries
const DISPLAY_ORDER: [ColumnId; 5] = [
    ColumnId::VolumeMa,
    ColumnId::BollMid,
    ColumnId::BollUpper,
    ColumnId::BollLower,
    ColumnId::Rsi,
];

/// One loaded series with everything derived from it.
///
/// Columns are computed once per session; a new series means a new
/// session, so readers never observe a half-updated state.
#[derive(Debug)]
pub struct Session {
    series: TimeSeries,
    columns: ColumnSet,
    diagnostics: Vec<Diagnostic>,
    config: IndicatorConfig,
}

impl Session {
    pub fn new(series: TimeSeries, config: IndicatorConfig) -> Self {
        let columns = ColumnSet::new(series.len());
        Self {
            series,
            columns,
            diagnostics: Vec::new(),
            config,
        }
    }

    /// Run the enabled transforms and attach their columns
    pub fn compute(&mut self) -> Result<(), IndicatorError> {
        if self.series.is_empty() {
            return Err(IndicatorError::new(
                "source series has no records",
                ErrCode::NoData,
            ));
        }

        if self.config.cal_volume_ma {
            let (column, diagnostic) =
                volume::moving_volume_average(&self.series, self.config.volume_window)?;
            self.columns.insert(column)?;
            self.diagnostics.extend(diagnostic);
        }

        if self.config.cal_boll {
            let (bands, diagnostic) = boll::bollinger_bands(&self.series, self.config.boll_n)?;
            self.columns.insert(bands.mid)?;
            self.columns.insert(bands.upper)?;
            self.columns.insert(bands.lower)?;
            self.diagnostics.extend(diagnostic);
        }

        if self.config.cal_rsi {
            let (column, diagnostic) = rsi::rsi(&self.series, self.config.rsi_cycle)?;
            self.columns.insert(column)?;
            self.diagnostics.extend(diagnostic);
        }

        Ok(())
    }

    /// Resolve a cursor coordinate against the computed columns
    pub fn resolve_cursor(&self, x: f64) -> Option<DisplayValues> {
        resolve_cursor(&self.series, &self.columns, &self.column_ids(), x)
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Column ids computed for this session, in display order
    pub fn column_ids(&self) -> Vec<ColumnId> {
        DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|&id| self.columns.contains(id))
            .collect()
    }
}
