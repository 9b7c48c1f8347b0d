//! Schema-driven form engine.
//!
//! ARCHITECTURE
//! ============
//! The server declares each form as JSON (`schema`); `value` tracks the
//! field-keyed value map with type-aware defaults; `validate` produces the
//! field-keyed error map; `payload` builds the JSON or multipart request
//! body; `engine` ties them together into the `SchemaForm` component and the
//! submit pipeline. Everything except `engine` is plain Rust, testable
//! without a browser.

pub mod engine;
pub mod payload;
pub mod schema;
pub mod validate;
pub mod value;
