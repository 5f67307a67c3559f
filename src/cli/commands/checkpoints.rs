use crate::core::notify::scheduler::{OVERTIME_CHECKPOINTS, REMAINING_CHECKPOINTS};
use crate::errors::AppResult;
use crate::utils::formatting::format_remaining;

pub fn handle() -> AppResult<()> {
    println!("Remaining-time checkpoints:");
    for m in REMAINING_CHECKPOINTS {
        if m == 0 {
            println!("  {:>3} min  (completion)", m);
        } else {
            println!("  {:>3} min  ({})", m, format_remaining(m));
        }
    }

    println!("Overtime checkpoints:");
    for m in OVERTIME_CHECKPOINTS {
        println!("  {:>3} min", m);
    }
    Ok(())
}
