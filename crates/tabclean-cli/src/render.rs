//! Terminal tables for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use tabclean_clean::{
    MissingReport, MissingStrategy, NormalizationMethod, OutlierBounds, OutlierDetection,
    OutlierMethod, STATISTIC_LABELS, SummaryStatistics,
};
use tabclean_common::{any_to_string, format_numeric, format_statistic};

/// Rows shown when a table is printed instead of written.
pub const PREVIEW_ROWS: usize = 10;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn missing_table(report: &MissingReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Percent"),
    ]);
    apply_table_style(&mut table);
    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(&entry.column),
            Cell::new(entry.count),
            Cell::new(format!("{:.2}%", entry.percentage)),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// First [`PREVIEW_ROWS`] rows of `df`, nulls shown as blank cells.
pub fn preview_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let shown = df.height().min(PREVIEW_ROWS);
    for row in 0..shown {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| match column.get(row) {
                Ok(value) => Cell::new(any_to_string(value)),
                Err(_) => dim_cell("?"),
            })
            .collect();
        table.add_row(cells);
    }
    table
}

/// One-line footer describing how much of `df` a preview shows.
pub fn preview_footer(df: &DataFrame) -> String {
    let shown = df.height().min(PREVIEW_ROWS);
    format!(
        "showing {shown} of {} rows, {} columns",
        df.height(),
        df.width()
    )
}

pub fn outlier_table(detection: &OutlierDetection) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);

    let mut rows: Vec<(&str, String)> = vec![
        ("column", detection.column.clone()),
        ("method", detection.method.to_string()),
        ("threshold", format_numeric(detection.threshold)),
    ];
    match detection.bounds {
        OutlierBounds::Iqr {
            q1,
            q3,
            iqr,
            lower,
            upper,
        } => {
            rows.push(("q1", format_statistic(q1)));
            rows.push(("q3", format_statistic(q3)));
            rows.push(("iqr", format_statistic(iqr)));
            rows.push(("lower bound", format_statistic(lower)));
            rows.push(("upper bound", format_statistic(upper)));
        }
        OutlierBounds::ZScore { mean, std } => {
            rows.push(("mean", format_statistic(mean)));
            rows.push(("std", format_statistic(std)));
        }
        OutlierBounds::Degenerate => rows.push(("bounds", "none (no spread)".to_string())),
    }
    rows.push(("outliers", detection.count.to_string()));

    for (property, value) in rows {
        table.add_row(vec![Cell::new(property), Cell::new(value)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn summary_table(summary: &SummaryStatistics) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("statistic")];
    header.extend(summary.columns.iter().map(|c| header_cell(&c.column)));
    table.set_header(header);
    apply_table_style(&mut table);

    let values: Vec<[f64; 11]> = summary.columns.iter().map(|c| c.statistics()).collect();
    for (index, label) in STATISTIC_LABELS.iter().enumerate() {
        let mut row = vec![Cell::new(*label).add_attribute(Attribute::Bold)];
        row.extend(
            values
                .iter()
                .map(|stats| Cell::new(format_statistic(stats[index]))),
        );
        table.add_row(row);
    }
    for index in 1..=summary.columns.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn methods_table() -> Table {
    fn join<T: ToString>(tags: &[T]) -> String {
        tags.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Selector"),
        header_cell("Tags"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("impute --strategy"),
        Cell::new(join(&MissingStrategy::ALL)),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("outliers --method"),
        Cell::new(join(&OutlierMethod::ALL)),
        Cell::new(OutlierMethod::default()),
    ]);
    table.add_row(vec![
        Cell::new("normalize --method"),
        Cell::new(join(&NormalizationMethod::ALL)),
        Cell::new(NormalizationMethod::default()),
    ]);
    table
}
