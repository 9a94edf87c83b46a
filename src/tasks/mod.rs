//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache sweep: removes expired response-cache entries at a fixed interval

mod sweep;

pub use sweep::SweepScheduler;
