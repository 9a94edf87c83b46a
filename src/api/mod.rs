//! API Module
//!
//! HTTP handlers, routing and the response caching middleware.
//!
//! # Endpoints
//! - `POST /api/list/create/:user_id` - Create a list
//! - `GET /api/list/getlists/:user_id` - Fetch a user's lists
//! - `PUT /api/list/update/:id` - Update a list
//! - `DELETE /api/list/delete/:id` - Delete a list
//! - `GET /cache/stats` - Response cache statistics
//! - `GET /health` - Health check endpoint

pub mod board;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use board::ListBoard;
pub use handlers::*;
pub use middleware::{cache_response, CacheLayer, CACHE_STATUS_HEADER};
pub use routes::create_router;
