//! Shared test utilities for the krb5-conf workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`reader`]: a reference krb5.conf reader with the paired parser's
//!   defaults, used to check that written files load back unchanged
//! - [`fixtures`]: ready-made configurations
//! - [`sink`]: byte sinks with scripted behaviour (failures, short writes)

pub mod fixtures;
pub mod reader;
pub mod sink;

pub use reader::{parser_defaults, read};
