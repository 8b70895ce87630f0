//! API client for the remote card database (magicthegathering.io)

pub mod mtgio;

// Re-exports for public API convenience
pub use mtgio::{ApiCard, MtgIoApi, DEFAULT_BASE_URL};
