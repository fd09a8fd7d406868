//! Application layer - Use cases and orchestration

pub mod headcount;
pub mod init;
pub mod manage_config;
pub mod staff_store;

pub use headcount::HeadcountService;
pub use init::{init, open_store};
pub use manage_config::ConfigService;
pub use staff_store::{SeedOutcome, StaffStore};
