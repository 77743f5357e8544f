//! # curator-pending
//!
//! TTL-bounded registry for submissions held for user confirmation.
//!
//! Mid-band submissions land here instead of the knowledge store. The
//! registry hands out opaque ids, serves cloned snapshots, and evicts
//! expired items lazily on every read path, so it stays correct even
//! when no periodic sweep is running.

pub mod store;

pub use store::PendingStore;
