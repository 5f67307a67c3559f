//! rWorkday main entrypoint.

use rworkday::run;
use rworkday::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
