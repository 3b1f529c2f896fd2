pub mod engine;
pub mod events;
pub mod schedule;
pub mod serialization;
