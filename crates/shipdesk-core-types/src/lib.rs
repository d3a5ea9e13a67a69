//! Core types shared across shipdesk facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility and by the error facility when it reports context.

pub mod schema;
