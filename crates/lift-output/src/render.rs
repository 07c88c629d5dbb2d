//! ASCII rendering of the building.
//!
//! ```text
//! 07:42  waiting 3  onboard 2
//! +-------+--------+--------+------------------------------------------+
//! | Floor | E0     | E1     | Calls                                    |
//! +-------+--------+--------+------------------------------------------+
//! |     4 |        |        | v*1                                      |
//! |     3 | ^(2)   |        |                                          |
//! |     2 |        |        | ^(1) v(1)                                |
//! |     1 |        |  (0)   |                                          |
//! |     0 |        |        |                                          |
//! +-------+--------+--------+------------------------------------------+
//! ```
//!
//! A car shows its direction glyph and passenger count.  Calls show per side
//! the number of priority riders (`*n`) and of everyone else (`(n)`).

use std::fmt::Write;

use lift_core::QueueSide;
use lift_dispatch::FleetSnapshot;
use lift_queue::FloorQueue;

const CALLS_WIDTH: usize = 40;

/// Render `fleet` as a multi-line panel, top floor first.
pub fn render_panel(fleet: FleetSnapshot<'_>) -> String {
    let cars = fleet.elevators.len();
    let rule = format!("+-------+{}{}+", "--------+".repeat(cars), "-".repeat(CALLS_WIDTH + 2));

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{}  waiting {}  onboard {}",
        fleet.clock,
        fleet.total_waiting(),
        fleet.total_onboard()
    );
    let _ = writeln!(out, "{rule}");
    out.push_str("| Floor ");
    for car in fleet.elevators {
        let _ = write!(out, "| {:<6} ", format!("E{}", car.id().0));
    }
    let _ = writeln!(out, "| {:<width$} |", "Calls", width = CALLS_WIDTH);
    let _ = writeln!(out, "{rule}");

    for queue in fleet.floors.iter().rev() {
        let floor = queue.floor();
        let _ = write!(out, "| {:>5} ", floor.0);
        for car in fleet.elevators.iter() {
            let cell = if car.floor() == floor {
                format!("{}({})", car.direction().glyph(), car.passenger_count())
            } else {
                String::new()
            };
            let _ = write!(out, "| {cell:<6} ");
        }
        let _ = writeln!(out, "| {:<width$} |", calls_summary(queue), width = CALLS_WIDTH);
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn calls_summary(queue: &FloorQueue) -> String {
    let mut text = String::new();
    for side in QueueSide::BOTH {
        let glyph = match side {
            QueueSide::Ascending  => '^',
            QueueSide::Descending => 'v',
        };
        let riders = queue.side(side);
        let priority = riders.iter().filter(|p| p.is_priority()).count();
        let others = riders.len() - priority;
        if priority > 0 {
            let _ = write!(text, "{glyph}*{priority} ");
        }
        if others > 0 {
            let _ = write!(text, "{glyph}({others}) ");
        }
    }

    let text = text.trim_end();
    if text.len() > CALLS_WIDTH {
        format!("{}...", &text[..CALLS_WIDTH - 3])
    } else {
        text.to_owned()
    }
}

