//! Kerberos client configuration writer.
//!
//! Serializes a [`Configuration`] into the textual `krb5.conf` format read by
//! Kerberos tooling. The output is deterministic and re-parses into the same
//! model:
//!
//! ```text
//! [libdefaults]
//!     default_realm = EXAMPLE.COM
//!
//! [realms]
//!     EXAMPLE.COM = {
//!         kdc = kdc1.example.com:88
//!     }
//!
//! [domain_realm]
//!     .example.com = EXAMPLE.COM
//! ```
//!
//! (Indentation in the real output is one tab per level.)
//!
//! # Example
//!
//! ```
//! use krb5_conf::{Configuration, Realm};
//!
//! let mut config = Configuration::default();
//! config.lib_defaults.default_realm = "EXAMPLE.COM".into();
//! config.realms.push(Realm {
//!     realm: "EXAMPLE.COM".into(),
//!     kdc: vec!["kdc1.example.com:88".into()],
//!     ..Realm::default()
//! });
//!
//! let text = krb5_conf::to_string(&config);
//! assert!(text.contains("\tdefault_realm = EXAMPLE.COM\n"));
//! assert!(text.contains("\t\tkdc = kdc1.example.com:88\n"));
//! ```

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use io::{write_atomic, write_file};
pub use model::{
    Configuration, DEFAULT_REALM_TRY_DOMAINS, DEFAULT_UDP_PREFERENCE_LIMIT, LibDefaults, Realm,
};
pub use value::{Unset, Value, format_duration, present};
pub use writer::{ConfigWriter, lib_defaults_entries, to_string, write};
