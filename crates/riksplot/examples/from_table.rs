//! Builds a chart from an inline seat table and prints the SVG document.
//!
//! Run with: `cargo run --example from_table -p riksplot`

use std::collections::BTreeMap;

use riksplot::{ChartBuilder, SeatTable, config::AppConfig};

fn main() {
    let mut table = SeatTable::new();
    for (year, results) in [
        ("2014", vec![("S", "113"), ("M", "84"), ("SD", "49"), ("V", "21")]),
        ("2018", vec![("S", "100"), ("M", "70"), ("SD", "62"), ("V", "28")]),
        ("2022", vec![("S", "107"), ("M", "68"), ("SD", "73"), ("V", "24")]),
    ] {
        let entries: BTreeMap<String, String> = results
            .into_iter()
            .map(|(code, seats)| (code.to_string(), seats.to_string()))
            .collect();
        table.insert(year.to_string(), entries);
    }

    let builder = ChartBuilder::new(AppConfig::default());
    let slices = builder.structure(&table);
    let chart = builder.layout(&slices).expect("inline table lays out");

    println!("{}", builder.render_svg(&chart));
}
