pub mod calculator;
pub mod config;
pub mod logic;
pub mod notify;
pub mod ticker;
pub mod tracker;
