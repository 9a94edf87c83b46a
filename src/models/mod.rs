//! Request and Response models for the list API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod list;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use list::TaskList;
pub use requests::{CreateListRequest, UpdateListRequest};
pub use responses::{
    CacheStatsResponse, DeleteListResponse, DeletedList, HealthResponse, ListResponse,
    ListsResponse,
};
