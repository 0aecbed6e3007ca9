pub mod commit_tracker;
pub mod executor;
pub mod remote_store;

pub use commit_tracker::CommitTracker;
pub use executor::ImportExecutor;
pub use remote_store::{BillOfLadingStore, HttpBillOfLadingStore, StoreError};
