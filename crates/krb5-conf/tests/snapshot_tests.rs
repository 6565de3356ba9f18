use krb5_conf::{Configuration, to_string};
use krb5_test_utils::fixtures;

/// Tabs shown as four spaces so the snapshot stays readable.
fn visible(config: &Configuration) -> String {
    to_string(config).replace('\t', "    ")
}

#[test]
fn snapshot_test_kdc_config() {
    insta::assert_snapshot!(visible(&fixtures::test_kdc_config()), @r"
[libdefaults]
    allow_weak_crypto = false
    canonicalize = false
    ccache_type = 4
    clockskew = 5m0s
    default_client_keytab_name = /usr/local/var/krb5/user/0/client.keytab
    default_keytab_name = /etc/krb5.keytab
    default_realm = TEST.GOKRB5
    default_tgs_enctypes = aes256-cts-hmac-sha1-96 aes128-cts-hmac-sha1-96 des3-cbc-sha1 arcfour-hmac-md5 camellia256-cts-cmac camellia128-cts-cmac des-cbc-crc des-cbc-md5 des-cbc-md4
    default_tkt_enctypes = aes256-cts-hmac-sha1-96 aes128-cts-hmac-sha1-96 des3-cbc-sha1 arcfour-hmac-md5 camellia256-cts-cmac camellia128-cts-cmac des-cbc-crc des-cbc-md5 des-cbc-md4
    dns_canonicalize_hostname = true
    dns_lookup_kdc = false
    dns_lookup_realm = false
    forwardable = true
    ignore_acceptor_hostname = false
    k5login_authoritative = false
    kdc_default_options = 0x00000010
    kdc_timesync = 1
    noaddresses = true
    permitted_enctypes = aes256-cts-hmac-sha1-96 aes128-cts-hmac-sha1-96 des3-cbc-sha1 arcfour-hmac-md5 camellia256-cts-cmac camellia128-cts-cmac des-cbc-crc des-cbc-md5 des-cbc-md4
    preferred_preauth_types = 17,16,15,14
    proxiable = false
    rdns = true
    realm_try_domains = -1
    safe_checksum_type = 8
    ticket_lifetime = 24h0m0s
    udp_preference_limit = 1
    verify_ap_req_nofail = false

[realms]
    TEST.GOKRB5 = {
        admin_server = 127.0.0.1:749
        default_domain = test.gokrb5
        kdc = 127.0.0.1:88
        kpasswd_server = 127.0.0.1:464
    }

[domain_realm]
    .test.gokrb5 = TEST.GOKRB5
    test.gokrb5 = TEST.GOKRB5
");
}

#[test]
fn snapshot_json_fixture() {
    let json = include_str!("fixtures/example_com.json");
    let config: Configuration = serde_json::from_str(json).unwrap();

    insta::assert_snapshot!(visible(&config), @r"
[libdefaults]
    allow_weak_crypto = false
    canonicalize = false
    default_realm = EXAMPLE.COM
    default_tgs_enctypes = aes256-cts-hmac-sha1-96 aes128-cts-hmac-sha1-96
    dns_canonicalize_hostname = false
    dns_lookup_kdc = true
    dns_lookup_realm = false
    extra_addresses = 192.0.2.10
    forwardable = true
    ignore_acceptor_hostname = false
    k5login_authoritative = false
    noaddresses = false
    proxiable = false
    rdns = false
    realm_try_domains = -1
    renew_lifetime = 168h0m0s
    ticket_lifetime = 10h0m0s
    udp_preference_limit = 1465
    verify_ap_req_nofail = false

[realms]
    EXAMPLE.COM = {
        admin_server = kerberos.example.com
        kdc = kerberos.example.com:88
        kdc = kerberos-1.example.com:88
    }

[domain_realm]
    .example.com = EXAMPLE.COM
    example.com = EXAMPLE.COM
");
}
