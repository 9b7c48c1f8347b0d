//! Network layer: DTOs, the fetch wrapper, and typed endpoint helpers.
//!
//! ARCHITECTURE
//! ============
//! `http` owns transport concerns (CSRF header, query casing, error
//! wrapping); `api` exposes one async function per endpoint; `types` holds
//! the wire DTOs shared by pages and state.

pub mod api;
pub mod http;
pub mod types;
