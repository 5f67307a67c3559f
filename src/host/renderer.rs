use crate::models::aggregate::BreakInterval;
use crate::models::display::DisplayBundle;
use crate::ui::messages::info;
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, MAGENTA, RESET, YELLOW};
use crate::utils::formatting::{bold, pad_display};
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;
use tracing::warn;

pub trait Renderer {
    /// Attach a break badge to a session row. Repeated calls for the same
    /// row replace the badge instead of adding another.
    fn annotate_break(&mut self, brk: &BreakInterval);

    fn render(&mut self, bundle: &DisplayBundle);

    /// The sheet is open but holds no sessions; replaces any previous render.
    fn render_empty(&mut self);

    /// Forget per-sheet decorations once the sheet is gone.
    fn clear(&mut self) {}
}

const CARD_WIDTH: usize = 28;

/// Coloured metric cards plus the punch table.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    badges: BTreeMap<usize, String>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn badges(&self) -> &BTreeMap<usize, String> {
        &self.badges
    }

    /// Full screen text for one bundle.
    pub fn compose(&self, bundle: &DisplayBundle) -> String {
        let (remaining_icon, remaining_color) = if bundle.completed {
            ("🎉", GREEN)
        } else {
            ("⌛", CYAN)
        };

        let cards = [
            ("⏱️", "Total Duration", bundle.total_duration.as_str(), MAGENTA),
            ("🎯", "8hr Completion", bundle.completion_time.as_str(), BLUE),
            ("⭐", "Overtime", bundle.overtime.as_str(), YELLOW),
            (
                remaining_icon,
                "Remaining Time",
                bundle.remaining_time_str.as_str(),
                remaining_color,
            ),
        ];

        let mut out = String::new();
        for pair in cards.chunks(2) {
            let labels: Vec<String> = pair
                .iter()
                .map(|(icon, label, _, color)| {
                    format!("{color}{}{RESET}", pad_display(&format!("{icon} {label}"), CARD_WIDTH))
                })
                .collect();
            let values: Vec<String> = pair
                .iter()
                .map(|(_, _, value, _)| pad_display(&bold(value), CARD_WIDTH))
                .collect();
            out.push_str(&labels.join("  "));
            out.push('\n');
            out.push_str(&values.join("  "));
            out.push_str("\n\n");
        }

        if !bundle.sessions.is_empty() {
            let mut table = Table::new(vec![
                Column::new("#", 3),
                Column::new("IN", 10),
                Column::new("OUT", 10),
                Column::new("", 16),
            ]);
            for (row, s) in bundle.sessions.iter().enumerate() {
                let badge = self
                    .badges
                    .get(&row)
                    .map(|b| format!("{GREY}{b}{RESET}"))
                    .unwrap_or_default();
                table.add_row(vec![
                    (row + 1).to_string(),
                    s.start_str().to_string(),
                    s.end_str().to_string(),
                    badge,
                ]);
            }
            out.push_str(&table.render());
        }

        out
    }
}

impl Renderer for TerminalRenderer {
    fn annotate_break(&mut self, brk: &BreakInterval) {
        self.badges.insert(brk.row, brk.badge());
    }

    fn render(&mut self, bundle: &DisplayBundle) {
        println!("{}", self.compose(bundle));
    }

    fn render_empty(&mut self) {
        self.badges.clear();
        info("Nothing to show yet: no sessions found.");
    }

    fn clear(&mut self) {
        self.badges.clear();
    }
}

/// One JSON object per render, for piping into other tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn annotate_break(&mut self, _brk: &BreakInterval) {}

    fn render(&mut self, bundle: &DisplayBundle) {
        match serde_json::to_string(bundle) {
            Ok(json) => println!("{json}"),
            Err(e) => warn!(error = %e, "cannot serialize display bundle"),
        }
    }

    fn render_empty(&mut self) {
        println!("null");
    }
}
