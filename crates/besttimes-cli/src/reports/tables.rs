use besttimes_core::query::HintsFilter;
use besttimes_core::util::format_minutes;
use besttimes_core::{LevelStatistics, TimeStatistics};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Cells for one bucket row: boards played, best and average as `m:ss`.
/// Buckets where nothing finished in time show `-` for both times.
fn bucket_cells(times: &TimeStatistics) -> [String; 3] {
    let best = if times.has_valid_time() {
        format_minutes(times.fastest())
    } else {
        "-".to_string()
    };
    let average = times
        .average()
        .map(format_minutes)
        .unwrap_or_else(|_| "-".to_string());

    [times.games().to_string(), best, average]
}

/// Rows for one level, clean play first, then with hints. Buckets without
/// games are skipped and the level name only heads the first printed row.
fn level_rows(level: &LevelStatistics) -> Vec<[String; 5]> {
    [false, true]
        .into_iter()
        .filter(|&hints_used| level.bucket(hints_used).games() > 0)
        .enumerate()
        .map(|(i, hints_used)| {
            let [boards, best, average] = bucket_cells(level.bucket(hints_used));
            let name = if i == 0 { level.level().name() } else { "" };
            [
                name.to_string(),
                HintsFilter::from(hints_used).to_string(),
                boards,
                best,
                average,
            ]
        })
        .collect()
}

pub fn best_times(level: &LevelStatistics) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Hints"),
        Cell::new("Boards"),
        Cell::new("Best").fg(Color::Green),
        Cell::new("Average").fg(Color::Cyan),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for [name, hints, boards, best, average] in level_rows(level) {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(hints),
            Cell::new(boards),
            Cell::new(best).fg(Color::Green),
            Cell::new(average).fg(Color::Cyan),
        ]);
    }

    println!("\n{}", table);
}
