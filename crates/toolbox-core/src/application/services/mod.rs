//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "pull translations" or "push sources".

pub mod discovery_service;
pub mod pull_service;
pub mod push_service;

pub use discovery_service::{DISCOVERY_MAX_DEPTH, FileDiscovery};
pub use pull_service::{PullReport, PullService, PulledFile};
pub use push_service::{PushReport, PushService, PushedFile};
