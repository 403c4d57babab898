//! Shared fixtures used by unit tests across the workspace.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::{SalesTable, DATE_COLUMN, SALES_COLUMN, STORE_COLUMN};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Two stores (ids 1 and 3) over two days, rows interleaved by store.
/// Sales are `[100, 200]` for store 1 and `[300, 400]` for store 3, so
/// chart tests can assert padded y-ranges of `[-900, 1200]` and
/// `[-700, 1400]`.
pub fn two_store_table() -> SalesTable {
    let df = DataFrame::new(vec![
        Series::new(STORE_COLUMN.into(), vec![1i64, 3, 1, 3]).into(),
        Series::new(
            DATE_COLUMN.into(),
            vec![
                date(2015, 1, 1),
                date(2015, 1, 1),
                date(2015, 1, 2),
                date(2015, 1, 2),
            ],
        )
        .into(),
        Series::new(SALES_COLUMN.into(), vec![100.0f64, 300.0, 200.0, 400.0]).into(),
        Series::new("Xgboost".into(), vec![110.0f64, 310.0, 190.0, 410.0]).into(),
    ])
    .expect("valid sample frame");

    SalesTable::from_dataframe(df).expect("sample table is valid")
}

/// Three stores over one week with two forecast columns.
pub fn week_table() -> SalesTable {
    let store_ids = [2i64, 5, 9];
    let mut stores = Vec::new();
    let mut dates = Vec::new();
    let mut sales = Vec::new();
    let mut lightgbm = Vec::new();
    let mut random_forest = Vec::new();

    for day in 0..7u32 {
        for (slot, store) in store_ids.iter().enumerate() {
            stores.push(*store);
            dates.push(date(2015, 3, 1 + day));
            let observed = 4000.0 + (slot as f64) * 1500.0 + (day as f64) * 25.0;
            sales.push(observed);
            lightgbm.push(observed + 80.0);
            random_forest.push(observed - 120.0);
        }
    }

    let df = DataFrame::new(vec![
        Series::new(STORE_COLUMN.into(), stores).into(),
        Series::new(DATE_COLUMN.into(), dates).into(),
        Series::new(SALES_COLUMN.into(), sales).into(),
        Series::new("LightGBM".into(), lightgbm).into(),
        Series::new("RandomForest".into(), random_forest).into(),
    ])
    .expect("valid sample frame");

    SalesTable::from_dataframe(df).expect("sample table is valid")
}
