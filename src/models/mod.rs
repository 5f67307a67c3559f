pub mod aggregate;
pub mod display;
pub mod duration;
pub mod remaining;
pub mod session;
pub mod time_of_day;
