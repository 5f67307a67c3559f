use crate::cli::commands::{resolve_clock, resolve_source};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{NOT_AVAILABLE, aggregate::aggregate, remaining::remaining};
use crate::errors::AppResult;
use crate::models::duration::WorkDuration;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::formatting::{format_duration, format_remaining};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remaining { punches, at } = cmd {
        let source = resolve_source(punches, cfg)?;
        let now = resolve_clock(at.as_ref())?.now();

        let sessions = source.sessions();
        let state = aggregate(sessions.as_deref(), now)
            .and_then(|agg| remaining(agg.first_start_time.as_deref(), agg.total_break_minutes, now));

        match state {
            None => println!("{NOT_AVAILABLE}"),
            Some(s) => {
                let color = color_for_balance(s.remaining_minutes, s.overtime_minutes);
                println!("{color}{}{RESET}", format_remaining(s.remaining_minutes));
                if s.in_overtime() {
                    let d = WorkDuration::from_minutes(s.overtime_minutes);
                    println!("{color}Overtime: {}{RESET}", format_duration(d.hours, d.minutes));
                }
            }
        }
    }
    Ok(())
}
