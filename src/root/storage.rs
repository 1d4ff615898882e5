//! Root storage: persist the chosen root across process restarts.

mod contract;
pub mod env;
pub mod memory;
pub mod xdg;

pub use contract::RootStorage;
pub use env::EnvRootStorage;
pub use memory::MemoryRootStorage;
pub use xdg::XdgRootStorage;
