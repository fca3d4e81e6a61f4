pub mod ai;
pub mod export;
pub mod ingest;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
