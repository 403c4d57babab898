use chrono::NaiveDate;
use common::{ChartDescription, ChartLayout, ChartSeries, SeriesPoint, ValueRange};
use dataset::{SalesTable, DATE_COLUMN, SALES_COLUMN, STORE_COLUMN};
use polars::prelude::*;
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// Head-room added below and above the store's Sales extent on the y-axis.
pub const Y_AXIS_PADDING: f64 = 1000.0;

/// Builds the chart for one selection: the store at `store_index` in the
/// sorted distinct identifier list, with one line per entry of `selected`.
///
/// The y-axis is always padded from the filtered `Sales` extent, even when
/// `Sales` is not among the selected series, and the x-axis spans the full
/// table, so both axes stay put while the user flips between stores.
#[instrument(skip(table), fields(store_index = store_index, selected = ?selected))]
pub fn build_chart(
    table: &SalesTable,
    store_index: usize,
    selected: &[String],
) -> Result<ChartDescription> {
    let store_id =
        table
            .resolve_store(store_index)
            .ok_or(ComputeError::StoreIndexOutOfRange {
                index: store_index,
                store_count: table.store_count(),
            })?;

    for name in selected {
        if !table.has_column(name) {
            return Err(ComputeError::UnknownColumn(name.clone()));
        }
    }

    trace!("Filtering observations for store {}", store_id);
    let store_df = table
        .frame()
        .clone()
        .lazy()
        .filter(col(STORE_COLUMN).eq(lit(store_id)))
        .collect()?;

    let dates = column_dates(&store_df)?;

    let mut series = Vec::with_capacity(selected.len());
    for name in selected {
        let values = store_df.column(name.as_str())?.f64()?;
        let points = dates
            .iter()
            .zip(values.into_no_null_iter())
            .map(|(&date, value)| SeriesPoint::new(date, value))
            .collect();
        series.push(ChartSeries::new(name.clone(), points));
    }

    let sales = store_df.column(SALES_COLUMN)?.f64()?;
    let (sales_min, sales_max) = match (sales.min(), sales.max()) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            return Err(ComputeError::Series(format!(
                "no Sales values for store {}",
                store_id
            )))
        }
    };

    debug!(
        "Built {} series over {} rows for store {}",
        series.len(),
        store_df.height(),
        store_id
    );

    Ok(ChartDescription {
        title: format!("Store ID: {}", store_id),
        series,
        x_title: "Date".to_string(),
        y_title: "Sales".to_string(),
        x_range: table.date_range(),
        y_range: ValueRange::new(sales_min - Y_AXIS_PADDING, sales_max + Y_AXIS_PADDING),
        layout: ChartLayout::default(),
    })
}

/// Extracts the filtered frame's date column in row order.
fn column_dates(df: &DataFrame) -> Result<Vec<NaiveDate>> {
    let column = df.column(DATE_COLUMN)?;
    let mut dates = Vec::with_capacity(df.height());
    for index in 0..df.height() {
        dates.push(dataset::date_at(column, index)?);
    }
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::testing::{date, two_store_table, week_table};

    fn select(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn resolves_index_against_sorted_store_ids() {
        let table = two_store_table();
        let first = build_chart(&table, 0, &select(&["Sales"])).unwrap();
        let second = build_chart(&table, 1, &select(&["Sales"])).unwrap();
        assert_eq!(first.title, "Store ID: 1");
        assert_eq!(second.title, "Store ID: 3");
    }

    #[test]
    fn first_store_matches_worked_example() {
        let table = two_store_table();
        let chart = build_chart(&table, 0, &select(&["Sales"])).unwrap();

        assert_eq!(chart.series.len(), 1);
        let sales = &chart.series[0];
        assert_eq!(sales.name, "Sales");
        assert_eq!(
            sales.points,
            vec![
                SeriesPoint::new(date(2015, 1, 1), 100.0),
                SeriesPoint::new(date(2015, 1, 2), 200.0),
            ]
        );
        assert_eq!(chart.y_range, ValueRange::new(-900.0, 1200.0));
        assert_eq!(chart.x_range.start, date(2015, 1, 1));
        assert_eq!(chart.x_range.end, date(2015, 1, 2));
    }

    #[test]
    fn second_store_shares_the_x_range() {
        let table = two_store_table();
        let first = build_chart(&table, 0, &select(&["Sales"])).unwrap();
        let second = build_chart(&table, 1, &select(&["Sales"])).unwrap();

        assert_eq!(
            second.series[0].points,
            vec![
                SeriesPoint::new(date(2015, 1, 1), 300.0),
                SeriesPoint::new(date(2015, 1, 2), 400.0),
            ]
        );
        assert_eq!(second.y_range, ValueRange::new(-700.0, 1400.0));
        assert_eq!(second.x_range, first.x_range);
    }

    #[test]
    fn one_series_per_selected_column() {
        let table = two_store_table();
        let chart = build_chart(&table, 0, &select(&["Sales", "Xgboost"])).unwrap();

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Sales");
        assert_eq!(chart.series[1].name, "Xgboost");
        for series in &chart.series {
            assert_eq!(series.points.len(), 2);
        }
        assert_eq!(chart.series[1].points[0].value, 110.0);
    }

    #[test]
    fn y_range_keyed_to_sales_even_when_not_selected() {
        let table = two_store_table();
        let chart = build_chart(&table, 0, &select(&["Xgboost"])).unwrap();

        // Xgboost spans [110, 190] for store 1 but the axis still frames Sales.
        assert_eq!(chart.y_range, ValueRange::new(-900.0, 1200.0));
    }

    #[test]
    fn points_preserve_time_order() {
        let table = week_table();
        let chart = build_chart(&table, 2, &select(&["Sales", "LightGBM"])).unwrap();

        assert_eq!(chart.title, "Store ID: 9");
        for series in &chart.series {
            assert_eq!(series.points.len(), 7);
            for pair in series.points.windows(2) {
                assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let table = week_table();
        let selected = select(&["Sales", "RandomForest"]);
        let first = build_chart(&table, 1, &selected).unwrap();
        let second = build_chart(&table, 1, &selected).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_store_index_is_rejected() {
        let table = two_store_table();
        let err = build_chart(&table, 2, &select(&["Sales"])).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::StoreIndexOutOfRange {
                index: 2,
                store_count: 2
            }
        ));
    }

    #[test]
    fn unknown_series_column_is_rejected() {
        let table = two_store_table();
        let err = build_chart(&table, 0, &select(&["Sales", "Prophet"])).unwrap_err();
        assert!(matches!(err, ComputeError::UnknownColumn(c) if c == "Prophet"));
    }
}
