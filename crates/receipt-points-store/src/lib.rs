//! # Receipt Points Store
//!
//! Storage abstraction for scored receipts. Provides a trait-based interface
//! with an in-memory implementation.
//!
//! ## Overview
//!
//! The store maps a receipt id to its point value and creation time. It is
//! constructed by the application and shared by handle; there is no global
//! instance.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`MemoryStore`] - Mutex-guarded in-memory storage
//! - [`StoreRecord`] - One stored score
//! - [`Page`] - A slice of records plus the overall count
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points_store::{MemoryStore, Store};
//! use receipt_points_core::ReceiptId;
//!
//! async fn example() {
//!     let store = MemoryStore::new();
//!
//!     store.insert(&ReceiptId::new("abc"), 42).await.unwrap();
//!     assert_eq!(store.lookup(&ReceiptId::new("abc")).await.unwrap(), Some(42));
//!
//!     let page = store.list_page(10, 0).await.unwrap();
//!     assert_eq!(page.total, 1);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Last write wins**: inserting an existing id replaces the record
//! - **Stable ordering**: records list by creation time, ties by insertion order
//! - **Clamped pages**: out-of-range offsets yield an empty page, never an error

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{Page, Store, StoreRecord};
