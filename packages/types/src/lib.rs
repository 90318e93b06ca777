pub mod address;
pub mod event;
pub mod subsidy_indexer;
