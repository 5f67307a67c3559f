pub mod messages;
pub mod scheduler;
