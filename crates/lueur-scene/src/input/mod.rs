pub mod adapter;
pub mod queue;
