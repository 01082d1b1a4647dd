//! In-memory service stubs for tests and local tooling.

mod identity;

pub use identity::TestIdentityService;
