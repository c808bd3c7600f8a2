//! Stock universe adapters.
//!
//! A universe is the complete, materialized list of [`StockMetrics`] a
//! ranking request runs over. Sparse external feeds are converted here; any
//! missing or non-finite value is rejected with the row's symbol rather than
//! replaced by a default.

use std::collections::HashSet;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::{MarketData, Result, SmartBetaError, StockMetrics};

/// Columns a tabular universe must provide.
pub const UNIVERSE_COLUMNS: [&str; 8] = [
    "symbol",
    "name",
    "roe",
    "pe_ratio",
    "pb_ratio",
    "revenue_growth",
    "momentum",
    "volatility",
];

/// An ordered, validated set of stocks with unique symbols.
///
/// Input order is preserved; ranking uses it to break score ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockUniverse {
    stocks: Vec<StockMetrics>,
}

impl StockUniverse {
    /// Build a universe from records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] for a malformed record or
    /// a duplicated symbol.
    pub fn new(stocks: Vec<StockMetrics>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stocks.len());
        for stock in &stocks {
            stock.validate()?;
            if !seen.insert(stock.symbol.as_str()) {
                return Err(SmartBetaError::invalid(format!(
                    "duplicate symbol in universe: {}",
                    stock.symbol
                )));
            }
        }
        Ok(Self { stocks })
    }

    /// Convert a DataFrame with [`UNIVERSE_COLUMNS`] into a universe.
    ///
    /// Numeric columns are cast to `f64`, so integer columns and numeric
    /// strings are accepted. Values that cannot be cast become null and are
    /// rejected, as are null or blank names.
    ///
    /// # Errors
    ///
    /// - [`SmartBetaError::MissingColumn`] if a required column is absent
    /// - [`SmartBetaError::InvalidArgument`] for null or non-finite cells
    pub fn from_market_data(data: &MarketData) -> Result<Self> {
        for col in UNIVERSE_COLUMNS {
            if !data.has_column(col) {
                return Err(SmartBetaError::MissingColumn(col.to_string()));
            }
        }

        let df = data.data();
        let symbols = string_column(df, "symbol")?;
        let names = string_column(df, "name")?;

        let mut numeric = Vec::with_capacity(6);
        for col in &UNIVERSE_COLUMNS[2..] {
            numeric.push(float_column(df, col)?);
        }

        let mut stocks = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let symbol = symbols[row]
                .clone()
                .ok_or_else(|| SmartBetaError::invalid(format!("row {row} has no symbol")))?;
            let name = names[row]
                .clone()
                .ok_or_else(|| SmartBetaError::invalid(format!("stock '{symbol}' is missing name")))?;

            let mut values = [0.0_f64; 6];
            for (i, column) in numeric.iter().enumerate() {
                values[i] = column[row].ok_or_else(|| {
                    SmartBetaError::invalid(format!(
                        "stock '{symbol}' is missing {}",
                        UNIVERSE_COLUMNS[i + 2]
                    ))
                })?;
            }

            let [roe, pe_ratio, pb_ratio, revenue_growth, momentum, volatility] = values;
            stocks.push(StockMetrics::new(
                symbol,
                name,
                roe,
                pe_ratio,
                pb_ratio,
                revenue_growth,
                momentum,
                volatility,
            )?);
        }

        debug!(rows = stocks.len(), "converted market data into stock universe");
        Self::new(stocks)
    }

    /// Read a universe from a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or fails validation.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()?;
        Self::from_market_data(&MarketData::new(df))
    }

    /// Parse a universe from a JSON array of stock objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a field is missing, or a
    /// record fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let stocks: Vec<StockMetrics> = serde_json::from_str(json)?;
        Self::new(stocks)
    }

    /// The stocks, in input order.
    pub fn stocks(&self) -> &[StockMetrics] {
        &self.stocks
    }

    /// Number of stocks.
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Consumes self and returns the records.
    pub fn into_inner(self) -> Vec<StockMetrics> {
        self.stocks
    }
}

impl AsRef<[StockMetrics]> for StockUniverse {
    fn as_ref(&self) -> &[StockMetrics] {
        &self.stocks
    }
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|s| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
        .collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.as_materialized_series().f64()?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame() -> DataFrame {
        df! {
            "symbol" => &["HBL", "MCB"],
            "name" => &["Habib Bank", "MCB Bank"],
            "roe" => &[18.0, 22.5],
            "pe_ratio" => &[7.5, 9.0],
            "pb_ratio" => &[1.1, 1.6],
            "revenue_growth" => &[12.0, 4.0],
            "momentum" => &[8.0, -3.0],
            "volatility" => &[14.0, 11.0],
        }
        .unwrap()
    }

    #[test]
    fn test_from_market_data() {
        let universe = StockUniverse::from_market_data(&MarketData::new(frame())).unwrap();
        assert_eq!(universe.len(), 2);
        assert_eq!(universe.stocks()[0].symbol, "HBL");
        assert_eq!(universe.stocks()[1].name, "MCB Bank");
        assert_relative_eq!(universe.stocks()[1].roe, 22.5);
        assert_relative_eq!(universe.stocks()[1].momentum, -3.0);
    }

    #[test]
    fn test_integer_columns_are_cast() {
        let df = df! {
            "symbol" => &["LUCK"],
            "name" => &["Lucky Cement"],
            "roe" => &[15i64],
            "pe_ratio" => &[10i64],
            "pb_ratio" => &[2i64],
            "revenue_growth" => &[5i64],
            "momentum" => &[0i64],
            "volatility" => &[20i64],
        }
        .unwrap();
        let universe = StockUniverse::from_market_data(&MarketData::new(df)).unwrap();
        assert_relative_eq!(universe.stocks()[0].pe_ratio, 10.0);
    }

    #[test]
    fn test_missing_column() {
        let df = frame().drop("volatility").unwrap();
        let result = StockUniverse::from_market_data(&MarketData::new(df));
        assert!(matches!(result, Err(SmartBetaError::MissingColumn(c)) if c == "volatility"));
    }

    #[test]
    fn test_null_cell_is_rejected() {
        let df = df! {
            "symbol" => &["ATRL"],
            "name" => &["Attock Refinery"],
            "roe" => &[None::<f64>],
            "pe_ratio" => &[Some(6.0)],
            "pb_ratio" => &[Some(0.9)],
            "revenue_growth" => &[Some(3.0)],
            "momentum" => &[Some(12.0)],
            "volatility" => &[Some(25.0)],
        }
        .unwrap();
        let err = StockUniverse::from_market_data(&MarketData::new(df)).unwrap_err();
        assert!(matches!(err, SmartBetaError::InvalidArgument(_)));
        assert!(err.to_string().contains("ATRL"));
        assert!(err.to_string().contains("roe"));
    }

    #[test]
    fn test_null_name_is_rejected() {
        for name in [None, Some("  ")] {
            let df = df! {
                "symbol" => &["HBL"],
                "name" => &[name],
                "roe" => &[18.0],
                "pe_ratio" => &[7.5],
                "pb_ratio" => &[1.1],
                "revenue_growth" => &[12.0],
                "momentum" => &[8.0],
                "volatility" => &[14.0],
            }
            .unwrap();
            let err = StockUniverse::from_market_data(&MarketData::new(df)).unwrap_err();
            assert!(matches!(err, SmartBetaError::InvalidArgument(_)));
            assert!(err.to_string().contains("HBL"));
            assert!(err.to_string().contains("name"));
        }
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let a = StockMetrics::new("HBL", "A", 10.0, 10.0, 1.0, 0.0, 0.0, 10.0).unwrap();
        let result = StockUniverse::new(vec![a.clone(), a]);
        assert!(matches!(result, Err(SmartBetaError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"symbol":"EFERT","name":"Engro Fertilizers","roe":30.0,"pe_ratio":8.0,
             "pb_ratio":3.0,"revenue_growth":10.0,"momentum":5.0,"volatility":12.0}
        ]"#;
        let universe = StockUniverse::from_json_str(json).unwrap();
        assert_eq!(universe.len(), 1);
        assert!(StockUniverse::from_json_str("[{\"symbol\":\"X\"}]").is_err());
    }
}
