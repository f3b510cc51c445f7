//! Plain-text rendering of registry reports.

use std::io::{self, Write};

use catering_registry::{AssignmentLine, Availability};

pub fn write_assignments(out: &mut impl Write, lines: &[AssignmentLine]) -> io::Result<()> {
    writeln!(out, "== Assignments ==")?;
    for line in lines {
        writeln!(out, "Guest: {}", line.guest)?;
        match &line.assignment {
            Some(assigned) => {
                writeln!(out, "  Menu: {}", assigned.menu)?;
                for dish in &assigned.dishes {
                    writeln!(out, "    - {dish}")?;
                }
            }
            None => writeln!(out, "  No menu assigned.")?,
        }
    }
    Ok(())
}

pub fn write_availability(out: &mut impl Write, rows: &[Availability]) -> io::Result<()> {
    writeln!(out, "== Remaining availability ==")?;
    for row in rows {
        writeln!(out, "{}: {}", row.menu, row.remaining)?;
    }
    Ok(())
}
