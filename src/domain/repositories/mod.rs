//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`, and mock
//! implementations are auto-generated via `mockall` for testing.

pub mod click_repository;

pub use click_repository::ClickRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
