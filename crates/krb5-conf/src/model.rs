//! Kerberos client configuration model
//!
//! Mirrors the structure a krb5.conf parser produces. Every field keeps its
//! plain value; "not set" is the field's zero value (see [`crate::value::Unset`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;

/// Parser default for `realm_try_domains`.
pub const DEFAULT_REALM_TRY_DOMAINS: i32 = -1;

/// Parser default for `udp_preference_limit`.
pub const DEFAULT_UDP_PREFERENCE_LIMIT: i32 = 1465;

/// A complete client configuration: the three krb5.conf sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub lib_defaults: LibDefaults,
    pub realms: Vec<Realm>,
    /// DNS domain (or `.domain` suffix) to realm name.
    pub domain_realm: HashMap<String, String>,
}

/// The `[libdefaults]` section.
///
/// Field names match the krb5.conf keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibDefaults {
    pub allow_weak_crypto: bool,
    pub canonicalize: bool,
    pub ccache_type: i32,
    pub clockskew: Duration,
    pub default_client_keytab_name: String,
    pub default_keytab_name: String,
    pub default_realm: String,
    pub default_tgs_enctypes: Vec<String>,
    pub default_tkt_enctypes: Vec<String>,
    pub dns_canonicalize_hostname: bool,
    pub dns_lookup_kdc: bool,
    pub dns_lookup_realm: bool,
    pub extra_addresses: Vec<IpAddr>,
    pub forwardable: bool,
    pub ignore_acceptor_hostname: bool,
    pub k5login_authoritative: bool,
    pub k5login_directory: String,
    /// KDC option flags as raw big-endian bytes.
    pub kdc_default_options: Vec<u8>,
    pub kdc_timesync: i32,
    pub noaddresses: bool,
    pub permitted_enctypes: Vec<String>,
    pub preferred_preauth_types: Vec<i32>,
    pub proxiable: bool,
    pub rdns: bool,
    pub realm_try_domains: i32,
    pub renew_lifetime: Duration,
    pub safe_checksum_type: i32,
    pub ticket_lifetime: Duration,
    pub udp_preference_limit: i32,
    pub verify_ap_req_nofail: bool,
}

impl Default for LibDefaults {
    /// Every field unset, except the two settings that always carry a value.
    fn default() -> Self {
        Self {
            allow_weak_crypto: false,
            canonicalize: false,
            ccache_type: 0,
            clockskew: Duration::ZERO,
            default_client_keytab_name: String::new(),
            default_keytab_name: String::new(),
            default_realm: String::new(),
            default_tgs_enctypes: Vec::new(),
            default_tkt_enctypes: Vec::new(),
            dns_canonicalize_hostname: false,
            dns_lookup_kdc: false,
            dns_lookup_realm: false,
            extra_addresses: Vec::new(),
            forwardable: false,
            ignore_acceptor_hostname: false,
            k5login_authoritative: false,
            k5login_directory: String::new(),
            kdc_default_options: Vec::new(),
            kdc_timesync: 0,
            noaddresses: false,
            permitted_enctypes: Vec::new(),
            preferred_preauth_types: Vec::new(),
            proxiable: false,
            rdns: false,
            realm_try_domains: DEFAULT_REALM_TRY_DOMAINS,
            renew_lifetime: Duration::ZERO,
            safe_checksum_type: 0,
            ticket_lifetime: Duration::ZERO,
            udp_preference_limit: DEFAULT_UDP_PREFERENCE_LIMIT,
            verify_ap_req_nofail: false,
        }
    }
}

/// One entry of the `[realms]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Realm {
    /// Realm name, conventionally upper case (`EXAMPLE.COM`).
    pub realm: String,
    pub admin_server: Vec<String>,
    pub default_domain: String,
    pub kdc: Vec<String>,
    pub kpasswd_server: Vec<String>,
    pub master_kdc: Vec<String>,
}

impl Realm {
    /// Create a realm with no servers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            realm: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_defaults_default_keeps_always_written_values() {
        let ld = LibDefaults::default();
        assert_eq!(ld.realm_try_domains, -1);
        assert_eq!(ld.udp_preference_limit, 1465);
        assert_eq!(ld.ccache_type, 0);
        assert!(ld.default_realm.is_empty());
    }

    #[test]
    fn test_realm_new() {
        let realm = Realm::new("EXAMPLE.COM");
        assert_eq!(realm.realm, "EXAMPLE.COM");
        assert!(realm.kdc.is_empty());
        assert!(realm.default_domain.is_empty());
    }

    #[test]
    fn test_configuration_deserializes_partial_json() {
        let config: Configuration = serde_json::from_str(
            r#"{ "lib_defaults": { "default_realm": "EXAMPLE.COM" },
                 "realms": [ { "realm": "EXAMPLE.COM", "kdc": ["kdc1:88"] } ] }"#,
        )
        .unwrap();

        assert_eq!(config.lib_defaults.default_realm, "EXAMPLE.COM");
        assert_eq!(config.lib_defaults.udp_preference_limit, 1465);
        assert_eq!(config.realms[0].kdc, vec!["kdc1:88".to_string()]);
        assert!(config.domain_realm.is_empty());
    }
}
