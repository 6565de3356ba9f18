//! Ready-made configurations for writer tests.

use crate::reader::parser_defaults;
use krb5_conf::{Configuration, Realm};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// No realms, no mappings, every `[libdefaults]` setting unset.
pub fn empty_config() -> Configuration {
    Configuration::default()
}

/// A single realm `EXAMPLE.COM` with `kdc1:88` and `kdc2:88`, nothing else.
pub fn two_kdc_config() -> Configuration {
    Configuration {
        realms: vec![Realm {
            kdc: vec!["kdc1:88".into(), "kdc2:88".into()],
            ..Realm::new("EXAMPLE.COM")
        }],
        ..Configuration::default()
    }
}

/// The shape of configuration a test KDC hands out: parser defaults plus a
/// realm, a default realm, and domain mappings.
pub fn test_kdc_config() -> Configuration {
    let mut lib_defaults = parser_defaults();
    lib_defaults.default_realm = "TEST.GOKRB5".into();
    lib_defaults.dns_lookup_kdc = false;
    lib_defaults.dns_lookup_realm = false;
    lib_defaults.forwardable = true;
    lib_defaults.udp_preference_limit = 1;

    let realm = Realm {
        admin_server: vec!["127.0.0.1:749".into()],
        default_domain: "test.gokrb5".into(),
        kdc: vec!["127.0.0.1:88".into()],
        kpasswd_server: vec!["127.0.0.1:464".into()],
        ..Realm::new("TEST.GOKRB5")
    };

    let domain_realm = HashMap::from([
        (".test.gokrb5".to_string(), "TEST.GOKRB5".to_string()),
        ("test.gokrb5".to_string(), "TEST.GOKRB5".to_string()),
    ]);

    Configuration {
        lib_defaults,
        realms: vec![realm],
        domain_realm,
    }
}

/// Every `[libdefaults]` kind set to a non-default value, two realms, and
/// several mappings.
pub fn full_config() -> Configuration {
    let mut config = test_kdc_config();
    let ld = &mut config.lib_defaults;
    ld.allow_weak_crypto = true;
    ld.canonicalize = true;
    ld.ccache_type = 3;
    ld.clockskew = Duration::from_secs(120);
    ld.default_tgs_enctypes = vec!["aes256-cts-hmac-sha1-96".into()];
    ld.extra_addresses = vec![
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)),
    ];
    ld.k5login_directory = "/home/krb".into();
    ld.kdc_default_options = vec![0x50, 0x80, 0x00, 0x00];
    ld.renew_lifetime = Duration::from_secs(7 * 24 * 3600);
    ld.realm_try_domains = 1;
    ld.verify_ap_req_nofail = true;

    config.realms.push(Realm {
        kdc: vec!["kdc.other.example:88".into()],
        master_kdc: vec!["kdc.other.example:88".into()],
        ..Realm::new("OTHER.EXAMPLE")
    });
    config
        .domain_realm
        .insert(".other.example".into(), "OTHER.EXAMPLE".into());
    config
}
