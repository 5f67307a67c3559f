use crate::cli::parser::Commands;
use crate::core::calculator::parser::parse_time;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Parse { raw } = cmd {
        match parse_time(raw) {
            Some(t) => println!("{t}"),
            None => println!("absent"),
        }
    }
    Ok(())
}
