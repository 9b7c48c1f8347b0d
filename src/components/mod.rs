//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and shared widgets while reading/writing
//! shared state from the context providers.

pub mod data_table;
pub mod page_error;
pub mod side_nav;
pub mod toast;
