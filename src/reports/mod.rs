use colorforge::geometry::{clock_face_bearing, ArrangementMode};
use colorforge::palette::Color as Swatch;
use colorforge::record::{PlacementHint, ResultRecord};
use colorforge::scorer::Verdict;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn swatch_cell(c: Swatch) -> Cell {
    let (r, g, b) = c.rgb();
    Cell::new(c.to_string())
        .fg(Color::Rgb { r, g, b })
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Clock-face position of an evenly spaced slot, e.g. "10 o'clock" or "12:24".
fn clock_label(slot: usize, slots: usize) -> String {
    let angle = slot as f64 * 360.0 / slots as f64;
    let minutes = (clock_face_bearing(angle) * 2.0).round() as u32 % 720;
    let hour = match minutes / 60 {
        0 => 12,
        h => h,
    };
    match minutes % 60 {
        0 => format!("{} o'clock", hour),
        m => format!("{}:{:02}", hour, m),
    }
}

pub fn print_reference(order: &[Swatch], mode: ArrangementMode) {
    println!("\nReference ({}):", mode);
    let mut table = new_table();

    let header: Vec<Cell> = (0..order.len())
        .map(|i| {
            let label = match mode {
                ArrangementMode::Linear => format!("#{}", i + 1),
                ArrangementMode::Circular => clock_label(i, order.len()),
            };
            Cell::new(label).set_alignment(CellAlignment::Center)
        })
        .collect();
    table.add_row(header);
    table.add_row(order.iter().map(|&c| swatch_cell(c)).collect::<Vec<_>>());
    println!("{}", table);
    if mode == ArrangementMode::Circular {
        println!("Place the first color at 10 o'clock and continue clockwise.");
    }
}

pub fn print_comparison(record: &ResultRecord) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Generated"),
        Cell::new("Detected"),
        Cell::new("Match"),
    ]);

    for (i, &want) in record.reference_order.iter().enumerate() {
        let got = record.detected_order.get(i).copied();
        let hit = got == Some(want);
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            swatch_cell(want),
            got.map(swatch_cell).unwrap_or_else(|| Cell::new("-")),
            if hit {
                Cell::new("✔").fg(Color::Green)
            } else {
                Cell::new("✘").fg(Color::Red)
            },
        ]);
    }
    println!("\n{}", table);
}

pub fn print_summary(record: &ResultRecord) {
    let summary = record.summary();
    let mut table = new_table();
    let verdict_cell = match summary.verdict {
        Verdict::Correct => Cell::new("Correct").fg(Color::Green),
        Verdict::Incorrect => Cell::new("Incorrect").fg(Color::Red),
    };

    table.add_row(vec![
        Cell::new("Mode").add_attribute(Attribute::Bold),
        Cell::new("Correct"),
        Cell::new("Wrong"),
        Cell::new("Accuracy (%)").fg(Color::Cyan),
        Cell::new("Result").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(record.mode.to_string()),
        Cell::new(summary.correct_count),
        Cell::new(summary.wrong_count),
        Cell::new(format!("{:.2}", summary.accuracy)).fg(Color::Cyan),
        verdict_cell.add_attribute(Attribute::Bold),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}

pub fn print_highlights(hints: &[PlacementHint]) {
    if hints.is_empty() {
        return;
    }
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Marker").add_attribute(Attribute::Bold),
        Cell::new("X"),
        Cell::new("Y"),
        Cell::new("Highlight"),
    ]);

    for h in hints {
        let style = if h.correct {
            Cell::new("correct").fg(Color::Green)
        } else {
            Cell::new("misplaced").fg(Color::Red)
        };
        table.add_row(vec![
            swatch_cell(h.color),
            Cell::new(h.position.x).set_alignment(CellAlignment::Right),
            Cell::new(h.position.y).set_alignment(CellAlignment::Right),
            style,
        ]);
    }
    println!("\n{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_slots_start_at_ten_oclock() {
        let labels: Vec<String> = (0..6).map(|i| clock_label(i, 6)).collect();
        assert_eq!(
            labels,
            ["10 o'clock", "12 o'clock", "2 o'clock", "4 o'clock", "6 o'clock", "8 o'clock"]
        );
    }

    #[test]
    fn uneven_slots_show_minutes() {
        assert_eq!(clock_label(1, 5), "12:24");
        assert_eq!(clock_label(4, 5), "7:36");
    }
}
