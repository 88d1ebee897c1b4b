use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bisg_model::{CollapsedRace, RaceLabel};

use bisg_cli::types::ClassifyRunResult;

pub fn print_summary(result: &ClassifyRunResult) {
    println!("Records: {}", result.records);
    if let Some(path) = &result.output {
        println!("Results: {}", path.display());
    }
    print_baseline_table(result);
    print_predicted_table(result);
    print_confusion_table(result);
    if result.report.tie_breaks > 0 {
        println!(
            "Tie-breaks: {} record(s) reduced by priority order",
            result.report.tie_breaks
        );
    }
}

fn print_baseline_table(result: &ClassifyRunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Baseline"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for label in RaceLabel::ALL {
        let Some(count) = result.report.baseline.get(&label) else {
            continue;
        };
        table.add_row(vec![Cell::new(label.as_str()), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.report.baseline_total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_predicted_table(result: &ClassifyRunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Predicted"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for label in CollapsedRace::ALL {
        let Some(count) = result.report.predicted.get(&label) else {
            continue;
        };
        table.add_row(vec![Cell::new(label.as_str()), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.report.predicted_total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_confusion_table(result: &ClassifyRunResult) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Baseline \\ Predicted")];
    for label in CollapsedRace::ALL {
        header.push(header_cell(label.as_str()));
    }
    header.push(header_cell("Total"));
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 1..=6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for baseline in CollapsedRace::ALL {
        let mut row = vec![Cell::new(baseline.as_str())];
        for predicted in CollapsedRace::ALL {
            let count = result.report.confusion.cell(baseline, predicted);
            let cell = if baseline == predicted && count > 0 {
                Cell::new(count).fg(Color::Green)
            } else {
                Cell::new(count)
            };
            row.push(cell);
        }
        row.push(Cell::new(result.report.confusion.baseline_total(baseline)));
        table.add_row(row);
    }
    let mut totals = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ];
    for predicted in CollapsedRace::ALL {
        totals.push(
            Cell::new(result.report.confusion.predicted_total(predicted))
                .add_attribute(Attribute::Bold),
        );
    }
    totals.push(Cell::new(result.report.confusion.total()).add_attribute(Attribute::Bold));
    table.add_row(totals);
    println!("{table}");
    println!(
        "Agreement: {} of {} record(s)",
        result.report.confusion.agreement(),
        result.report.confusion.total()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
