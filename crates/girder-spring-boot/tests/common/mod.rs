//! Shared test helpers for generator integration tests

pub mod fixtures;
pub mod logs;
pub mod mock_server;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use logs::*;
#[allow(unused_imports)]
pub use mock_server::*;
