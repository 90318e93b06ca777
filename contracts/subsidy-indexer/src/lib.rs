pub mod contract;
pub mod error;
pub mod execute;
pub mod handlers;
pub mod query;
pub mod state;
