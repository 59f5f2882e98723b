//! The `gradecast grades` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradecast_core::GradeToken;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Grade", "Points"]);

    for grade in GradeToken::ALL {
        table.add_row(vec![
            Cell::new(grade),
            Cell::new(format!("{:.1}", grade.points())),
        ]);
    }

    println!("{table}");
    Ok(())
}
