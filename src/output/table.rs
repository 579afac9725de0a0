use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::consts::{FIELD_TIME_STAMP, MISSING};
use crate::core::{Destination, TestRecord};
use crate::output::SUMMARY_FIELDS;
use crate::output::format::{
    create_styled_table, field_or_missing, header_cell, right_cell, sort_by_time_stamp,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ListTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
}

/// Summary columns that hold measurements rather than labels
fn is_numeric_column(field: &str) -> bool {
    !matches!(field, "timeStamp" | "time" | "library" | "packetStyle")
}

pub(crate) fn render_list_table(
    records: &[TestRecord],
    destination: Destination,
    options: ListTableOptions,
) -> String {
    let mut sorted = records.to_vec();
    sort_by_time_stamp(&mut sorted, options.order);

    let mut table = create_styled_table();
    table.set_header(
        SUMMARY_FIELDS
            .iter()
            .map(|f| header_cell(f, options.use_color))
            .collect::<Vec<_>>(),
    );

    for record in &sorted {
        let row: Vec<Cell> = SUMMARY_FIELDS
            .iter()
            .map(|&field| {
                let text = field_or_missing(record, field);
                if field == FIELD_TIME_STAMP && options.use_color {
                    Cell::new(text).fg(Color::Green)
                } else if is_numeric_column(field) {
                    let color = (options.use_color && text == MISSING).then_some(Color::DarkGrey);
                    right_cell(text, color)
                } else {
                    Cell::new(text)
                }
            })
            .collect();
        table.add_row(row);
    }

    format!(
        "{} ({} records)\n{table}",
        destination.collection(),
        sorted.len()
    )
}
