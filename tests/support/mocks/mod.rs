// tests/support/mocks/mod.rs
pub mod catalog;
pub mod storage;
pub mod time;
pub mod util;

pub use catalog::{InMemoryCatalog, ProductRow, SharedProducts};
pub use storage::FailingStorage;
pub use time::fixed_now;
pub use util::DummyClock;
