pub mod application;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod context;
pub mod render;
pub mod sheets;
pub mod store;
pub mod table;

pub use application::{ApplicationId, ApplicationStatus, JobApplication, NewApplication};
pub use store::{ApplicationStore, StoreError, TableBackend};
pub use table::{ApplicationTable, RawTable};
