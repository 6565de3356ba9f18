//! krb5.conf writer
//!
//! Emits the three sections in fixed order:
//!
//! ```text
//! [libdefaults]
//! <TAB>key = value
//!
//! [realms]
//! <TAB>REALM = {
//! <TAB><TAB>kdc = host:port
//! <TAB>}
//!
//! [domain_realm]
//! <TAB>domain = REALM
//! ```
//!
//! Each line is formatted in full and handed to the sink with a single
//! `write_all`. The first failed write ends the pass.

use crate::error::Result;
use crate::model::{Configuration, LibDefaults, Realm};
use crate::value::{Value, present};
use std::fmt;
use std::io::Write;

/// One `[libdefaults]` key with its value, `None` when the key is omitted.
pub type Entry<'a> = (&'static str, Option<Value<'a>>);

/// Streams a [`Configuration`] into a byte sink as krb5.conf text.
///
/// The writer only borrows the configuration for the duration of
/// [`ConfigWriter::write`] and keeps no state between calls.
pub struct ConfigWriter<W: Write> {
    sink: W,
}

impl<W: Write> ConfigWriter<W> {
    /// Create a writer over an already open sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Give the sink back to the caller.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write the whole file.
    ///
    /// # Errors
    /// Returns [`crate::Error::Write`] with the sink's error on the first
    /// failed write. Nothing is written after that; the sink may hold a
    /// partial file.
    pub fn write(&mut self, config: &Configuration) -> Result<()> {
        tracing::debug!(
            realms = config.realms.len(),
            domains = config.domain_realm.len(),
            "Writing krb5.conf"
        );

        self.header("[libdefaults]", false)?;
        self.write_lib_defaults(&config.lib_defaults)?;

        self.header("[realms]", true)?;
        for realm in &config.realms {
            self.write_realm(realm)?;
        }

        self.header("[domain_realm]", true)?;
        let mut domains: Vec<_> = config.domain_realm.iter().collect();
        domains.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (domain, realm) in domains {
            self.line(1, format_args!("{} = {}", domain, realm))?;
        }

        self.sink.flush()?;
        tracing::debug!("Finished writing krb5.conf");
        Ok(())
    }

    fn write_lib_defaults(&mut self, lib_defaults: &LibDefaults) -> Result<()> {
        let entries = lib_defaults_entries(lib_defaults);
        tracing::trace!(
            keys = entries.iter().filter(|(_, v)| v.is_some()).count(),
            "Writing [libdefaults]"
        );
        for (key, value) in entries {
            if let Some(value) = value {
                self.entry(1, key, value)?;
            }
        }
        Ok(())
    }

    fn write_realm(&mut self, realm: &Realm) -> Result<()> {
        tracing::trace!(realm = %realm.realm, "Writing realm block");
        self.line(1, format_args!("{} = {{", realm.realm))?;
        self.servers("admin_server", &realm.admin_server)?;
        if let Some(domain) = present(&realm.default_domain) {
            self.entry(2, "default_domain", Value::from(domain))?;
        }
        self.servers("kdc", &realm.kdc)?;
        self.servers("kpasswd_server", &realm.kpasswd_server)?;
        self.servers("master_kdc", &realm.master_kdc)?;
        self.line(1, format_args!("}}"))
    }

    fn servers(&mut self, key: &str, addresses: &[String]) -> Result<()> {
        for address in addresses {
            self.entry(2, key, Value::Str(address))?;
        }
        Ok(())
    }

    fn header(&mut self, name: &str, blank_before: bool) -> Result<()> {
        let text = if blank_before {
            format!("\n{}\n", name)
        } else {
            format!("{}\n", name)
        };
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    fn entry(&mut self, indent: usize, key: &str, value: Value<'_>) -> Result<()> {
        self.line(indent, format_args!("{} = {}", key, value))
    }

    fn line(&mut self, indent: usize, content: fmt::Arguments<'_>) -> Result<()> {
        let text = format!("{}{}\n", "\t".repeat(indent), content);
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// The `[libdefaults]` table in output order (alphabetical by key).
///
/// Keys whose value is at its "not set" sentinel map to `None`. Booleans,
/// `realm_try_domains` and `udp_preference_limit` are always `Some`.
pub fn lib_defaults_entries(ld: &LibDefaults) -> [Entry<'_>; 30] {
    [
        ("allow_weak_crypto", Some(Value::Bool(ld.allow_weak_crypto))),
        ("canonicalize", Some(Value::Bool(ld.canonicalize))),
        ("ccache_type", present(&ld.ccache_type).map(Value::from)),
        ("clockskew", present(&ld.clockskew).map(Value::from)),
        (
            "default_client_keytab_name",
            present(&ld.default_client_keytab_name).map(Value::from),
        ),
        (
            "default_keytab_name",
            present(&ld.default_keytab_name).map(Value::from),
        ),
        ("default_realm", present(&ld.default_realm).map(Value::from)),
        (
            "default_tgs_enctypes",
            present(&ld.default_tgs_enctypes).map(Value::from),
        ),
        (
            "default_tkt_enctypes",
            present(&ld.default_tkt_enctypes).map(Value::from),
        ),
        (
            "dns_canonicalize_hostname",
            Some(Value::Bool(ld.dns_canonicalize_hostname)),
        ),
        ("dns_lookup_kdc", Some(Value::Bool(ld.dns_lookup_kdc))),
        ("dns_lookup_realm", Some(Value::Bool(ld.dns_lookup_realm))),
        ("extra_addresses", present(&ld.extra_addresses).map(Value::from)),
        ("forwardable", Some(Value::Bool(ld.forwardable))),
        (
            "ignore_acceptor_hostname",
            Some(Value::Bool(ld.ignore_acceptor_hostname)),
        ),
        (
            "k5login_authoritative",
            Some(Value::Bool(ld.k5login_authoritative)),
        ),
        (
            "k5login_directory",
            present(&ld.k5login_directory).map(Value::from),
        ),
        (
            "kdc_default_options",
            present(&ld.kdc_default_options).map(Value::from),
        ),
        ("kdc_timesync", present(&ld.kdc_timesync).map(Value::from)),
        ("noaddresses", Some(Value::Bool(ld.noaddresses))),
        (
            "permitted_enctypes",
            present(&ld.permitted_enctypes).map(Value::from),
        ),
        (
            "preferred_preauth_types",
            present(&ld.preferred_preauth_types).map(Value::from),
        ),
        ("proxiable", Some(Value::Bool(ld.proxiable))),
        ("rdns", Some(Value::Bool(ld.rdns))),
        ("realm_try_domains", Some(Value::Int(ld.realm_try_domains))),
        ("renew_lifetime", present(&ld.renew_lifetime).map(Value::from)),
        (
            "safe_checksum_type",
            present(&ld.safe_checksum_type).map(Value::from),
        ),
        ("ticket_lifetime", present(&ld.ticket_lifetime).map(Value::from)),
        (
            "udp_preference_limit",
            Some(Value::Int(ld.udp_preference_limit)),
        ),
        (
            "verify_ap_req_nofail",
            Some(Value::Bool(ld.verify_ap_req_nofail)),
        ),
    ]
}

/// Write `config` to `sink` as a krb5.conf file.
///
/// # Example
/// ```
/// use krb5_conf::Configuration;
///
/// let mut out = Vec::new();
/// krb5_conf::write(&Configuration::default(), &mut out).unwrap();
/// assert!(out.starts_with(b"[libdefaults]\n"));
/// ```
pub fn write<W: Write>(config: &Configuration, sink: &mut W) -> Result<()> {
    ConfigWriter::new(sink).write(config)
}

/// Render `config` as krb5.conf text in memory.
pub fn to_string(config: &Configuration) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write(config, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_entries_are_alphabetical() {
        let ld = LibDefaults::default();
        let keys: Vec<_> = lib_defaults_entries(&ld).iter().map(|(k, _)| *k).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_default_entries_keep_always_written_keys() {
        let ld = LibDefaults::default();
        let written: Vec<_> = lib_defaults_entries(&ld)
            .into_iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| k)
            .collect();

        assert!(written.contains(&"realm_try_domains"));
        assert!(written.contains(&"udp_preference_limit"));
        assert!(written.contains(&"forwardable"));
        assert!(!written.contains(&"ccache_type"));
        assert!(!written.contains(&"ticket_lifetime"));
        assert!(!written.contains(&"default_realm"));
    }

    #[test]
    fn test_udp_preference_limit_written_at_default() {
        let text = to_string(&Configuration::default());
        assert!(text.contains("\tudp_preference_limit = 1465\n"));
        assert!(text.contains("\trealm_try_domains = -1\n"));
    }

    #[test]
    fn test_realm_try_domains_zero_is_written() {
        let mut config = Configuration::default();
        config.lib_defaults.realm_try_domains = 0;
        assert!(to_string(&config).contains("\trealm_try_domains = 0\n"));
    }

    #[test]
    fn test_duration_uses_go_literal() {
        let mut config = Configuration::default();
        config.lib_defaults.ticket_lifetime = Duration::from_secs(24 * 3600);
        config.lib_defaults.clockskew = Duration::from_secs(300);
        let text = to_string(&config);
        assert!(text.contains("\tticket_lifetime = 24h0m0s\n"));
        assert!(text.contains("\tclockskew = 5m0s\n"));
    }

    #[test]
    fn test_realm_block_layout() {
        let mut config = Configuration::default();
        config.realms.push(Realm {
            realm: "EXAMPLE.COM".into(),
            admin_server: vec!["admin:749".into()],
            default_domain: "example.com".into(),
            kdc: vec!["kdc1:88".into()],
            kpasswd_server: vec!["admin:464".into()],
            master_kdc: vec!["kdc1:88".into()],
        });

        let text = to_string(&config);
        let block = text
            .split("[realms]\n")
            .nth(1)
            .and_then(|rest| rest.split("\n[domain_realm]").next())
            .unwrap();

        assert_eq!(
            block,
            "\tEXAMPLE.COM = {\n\
             \t\tadmin_server = admin:749\n\
             \t\tdefault_domain = example.com\n\
             \t\tkdc = kdc1:88\n\
             \t\tkpasswd_server = admin:464\n\
             \t\tmaster_kdc = kdc1:88\n\
             \t}\n"
        );
    }

    #[test]
    fn test_into_inner_returns_sink() {
        let mut writer = ConfigWriter::new(Vec::new());
        writer.write(&Configuration::default()).unwrap();
        let out = writer.into_inner();
        assert!(out.ends_with(b"\n[domain_realm]\n"));
    }
}
