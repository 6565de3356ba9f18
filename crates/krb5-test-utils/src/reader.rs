//! Reference krb5.conf reader.
//!
//! Reads the subset of krb5.conf that `krb5_conf::write` produces and starts
//! from the same built-in `[libdefaults]` values as the Go Kerberos parser the
//! writer is paired with, so `read(&to_string(&c)) == c` can be asserted for
//! any configuration the parser itself would produce.

use krb5_conf::{Configuration, LibDefaults, Realm};
use std::net::IpAddr;
use std::time::Duration;

const DEFAULT_ENCTYPES: [&str; 9] = [
    "aes256-cts-hmac-sha1-96",
    "aes128-cts-hmac-sha1-96",
    "des3-cbc-sha1",
    "arcfour-hmac-md5",
    "camellia256-cts-cmac",
    "camellia128-cts-cmac",
    "des-cbc-crc",
    "des-cbc-md5",
    "des-cbc-md4",
];

/// `[libdefaults]` as the parser fills it before reading any file.
pub fn parser_defaults() -> LibDefaults {
    let enctypes: Vec<String> = DEFAULT_ENCTYPES.iter().map(|s| s.to_string()).collect();
    LibDefaults {
        ccache_type: 4,
        clockskew: Duration::from_secs(300),
        default_client_keytab_name: "/usr/local/var/krb5/user/0/client.keytab".into(),
        default_keytab_name: "/etc/krb5.keytab".into(),
        default_tgs_enctypes: enctypes.clone(),
        default_tkt_enctypes: enctypes.clone(),
        dns_canonicalize_hostname: true,
        kdc_default_options: vec![0x00, 0x00, 0x00, 0x10],
        kdc_timesync: 1,
        noaddresses: true,
        permitted_enctypes: enctypes,
        preferred_preauth_types: vec![17, 16, 15, 14],
        rdns: true,
        safe_checksum_type: 8,
        ticket_lifetime: Duration::from_secs(24 * 3600),
        ..LibDefaults::default()
    }
}

/// Read krb5.conf text into a [`Configuration`].
///
/// Returns a message naming the offending line on malformed input.
pub fn read(text: &str) -> Result<Configuration, String> {
    let mut config = Configuration {
        lib_defaults: parser_defaults(),
        ..Configuration::default()
    };
    let mut section = String::new();
    let mut current: Option<Realm> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let at = |msg: &str| format!("line {}: {}: {:?}", index + 1, msg, raw);

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = name.trim().to_string();
            continue;
        }

        match section.as_str() {
            "libdefaults" => {
                let (key, value) = split_pair(line).ok_or_else(|| at("expected key = value"))?;
                set_lib_default(&mut config.lib_defaults, key, value).map_err(|e| at(&e))?;
            }
            "realms" => {
                if line == "}" {
                    let realm = current.take().ok_or_else(|| at("unmatched }"))?;
                    config.realms.push(realm);
                } else if let Some(head) = line.strip_suffix('{') {
                    let name = head.trim_end().strip_suffix('=').ok_or_else(|| at("expected ="))?;
                    current = Some(Realm::new(name.trim()));
                } else {
                    let realm = current.as_mut().ok_or_else(|| at("entry outside realm"))?;
                    let (key, value) = split_pair(line).ok_or_else(|| at("expected key = value"))?;
                    set_realm_entry(realm, key, value).map_err(|e| at(&e))?;
                }
            }
            "domain_realm" => {
                let (domain, realm) = split_pair(line).ok_or_else(|| at("expected key = value"))?;
                config
                    .domain_realm
                    .insert(domain.to_string(), realm.to_string());
            }
            _ => return Err(at("entry outside a known section")),
        }
    }

    if current.is_some() {
        return Err("unterminated realm block".to_string());
    }
    Ok(config)
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

fn set_lib_default(ld: &mut LibDefaults, key: &str, value: &str) -> Result<(), String> {
    match key {
        "allow_weak_crypto" => ld.allow_weak_crypto = parse_bool(value)?,
        "canonicalize" => ld.canonicalize = parse_bool(value)?,
        "ccache_type" => ld.ccache_type = parse_int(value)?,
        "clockskew" => ld.clockskew = parse_duration(value)?,
        "default_client_keytab_name" => ld.default_client_keytab_name = value.to_string(),
        "default_keytab_name" => ld.default_keytab_name = value.to_string(),
        "default_realm" => ld.default_realm = value.to_string(),
        "default_tgs_enctypes" => ld.default_tgs_enctypes = words(value),
        "default_tkt_enctypes" => ld.default_tkt_enctypes = words(value),
        "dns_canonicalize_hostname" => ld.dns_canonicalize_hostname = parse_bool(value)?,
        "dns_lookup_kdc" => ld.dns_lookup_kdc = parse_bool(value)?,
        "dns_lookup_realm" => ld.dns_lookup_realm = parse_bool(value)?,
        "extra_addresses" => {
            ld.extra_addresses = value
                .split(',')
                .map(|a| a.trim().parse::<IpAddr>().map_err(|e| e.to_string()))
                .collect::<Result<_, _>>()?
        }
        "forwardable" => ld.forwardable = parse_bool(value)?,
        "ignore_acceptor_hostname" => ld.ignore_acceptor_hostname = parse_bool(value)?,
        "k5login_authoritative" => ld.k5login_authoritative = parse_bool(value)?,
        "k5login_directory" => ld.k5login_directory = value.to_string(),
        "kdc_default_options" => ld.kdc_default_options = parse_hex(value)?,
        "kdc_timesync" => ld.kdc_timesync = parse_int(value)?,
        "noaddresses" => ld.noaddresses = parse_bool(value)?,
        "permitted_enctypes" => ld.permitted_enctypes = words(value),
        "preferred_preauth_types" => {
            ld.preferred_preauth_types = value
                .split(',')
                .map(|v| parse_int(v.trim()))
                .collect::<Result<_, _>>()?
        }
        "proxiable" => ld.proxiable = parse_bool(value)?,
        "rdns" => ld.rdns = parse_bool(value)?,
        "realm_try_domains" => ld.realm_try_domains = parse_int(value)?,
        "renew_lifetime" => ld.renew_lifetime = parse_duration(value)?,
        "safe_checksum_type" => ld.safe_checksum_type = parse_int(value)?,
        "ticket_lifetime" => ld.ticket_lifetime = parse_duration(value)?,
        "udp_preference_limit" => ld.udp_preference_limit = parse_int(value)?,
        "verify_ap_req_nofail" => ld.verify_ap_req_nofail = parse_bool(value)?,
        other => return Err(format!("unknown libdefaults key {}", other)),
    }
    Ok(())
}

fn set_realm_entry(realm: &mut Realm, key: &str, value: &str) -> Result<(), String> {
    match key {
        "admin_server" => realm.admin_server.push(value.to_string()),
        "default_domain" => realm.default_domain = value.to_string(),
        "kdc" => realm.kdc.push(value.to_string()),
        "kpasswd_server" => realm.kpasswd_server.push(value.to_string()),
        "master_kdc" => realm.master_kdc.push(value.to_string()),
        other => return Err(format!("unknown realm key {}", other)),
    }
    Ok(())
}

fn words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(format!("invalid boolean {}", value)),
    }
}

fn parse_int(value: &str) -> Result<i32, String> {
    value.parse().map_err(|_| format!("invalid integer {}", value))
}

fn parse_hex(value: &str) -> Result<Vec<u8>, String> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| format!("missing 0x prefix in {}", value))?;
    if digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(format!("invalid hex {}", value));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| e.to_string()))
        .collect()
}

/// Parse a Go duration literal (`1h2m3.5s`, `300ms`) or a plain second count.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    if let Ok(secs) = value.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total: u128 = 0;
    let mut rest = value;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in {}", value))?;
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        let scale: u128 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60 * 1_000_000_000,
            "h" => 3_600 * 1_000_000_000,
            _ => return Err(format!("unknown unit {:?} in {}", unit, value)),
        };

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| format!("invalid duration {}", value))?
        };
        let mut nanos = whole * scale;
        let mut place = scale;
        for digit in fraction.chars() {
            place /= 10;
            let digit = digit
                .to_digit(10)
                .ok_or_else(|| format!("invalid duration {}", value))?;
            nanos += u128::from(digit) * place;
        }

        total += nanos;
        rest = tail;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| format!("duration out of range: {}", value))
}
