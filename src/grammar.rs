//! Textual grammars for hosts, IPv4 addresses and userinfo.
//!
//! These are narrow hand-rolled shapes, not RFC grammars. Label lengths and
//! IDN normalization are not enforced. Every pattern is anchored at both ends
//! and the IPv4 octet fragment is shared by the address and private-range
//! patterns so their boundaries agree.

use once_cell::sync::Lazy;
use regex::Regex;

/// One IPv4 octet: 0-9, 10-99, 100-199, 200-249 or 250-255.
const IPV4_OCTET: &str = r"(?:[0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";

/// Unicode alphanumeric, as in a POSIX `[:alnum:]` class applied to Unicode.
const ALNUM: &str = r"\p{Alphabetic}\p{Nd}";

pub static RE_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s:@]+$").expect("valid user regex"));

pub static RE_PASSWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s:@]*$").expect("valid password regex"));

pub static RE_IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{o}(?:\.{o}){{3}}$", o = IPV4_OCTET)).expect("valid ipv4 regex")
});

pub static RE_DOMAIN_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:xn--)?[{a}_]+(?:[-.][{a}_]+)*\.[{a}]{{2,6}}\.?$",
        a = ALNUM
    ))
    .expect("valid domain name regex")
});

pub static RE_PRIVATE_RANGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?x)^(?:
            10\.{o}\.{o}\.{o}
          | 169\.254\.{o}\.{o}
          | 172\.(?:1[6-9]|2[0-9]|31)\.{o}\.{o}
          | 192\.168\.{o}\.{o}
        )$",
        o = IPV4_OCTET
    ))
    .expect("valid private range regex")
});

pub static RE_LOOPBACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:127\.0\.0\.1|localhost)$").expect("valid loopback regex"));

/// Whether `host` is a hostname: optional `xn--`, labels joined by `-` or `.`,
/// a 2-6 character final label and an optional root dot.
pub fn is_domain_name(host: &str) -> bool {
    RE_DOMAIN_NAME.is_match(host)
}

/// Whether `host` is a dotted-quad IPv4 address.
pub fn is_ipv4_address(host: &str) -> bool {
    RE_IPV4.is_match(host)
}

/// Whether `host` is literally `127.0.0.1` or `localhost`.
pub fn is_loopback(host: &str) -> bool {
    RE_LOOPBACK.is_match(host)
}

/// Whether `host` lies in 10/8, 169.254/16, 172.16/12 (minus 172.30) or 192.168/16.
pub fn is_private_range(host: &str) -> bool {
    RE_PRIVATE_RANGES.is_match(host)
}

pub fn is_valid_user(user: &str) -> bool {
    RE_USER.is_match(user)
}

/// Empty passwords are valid.
pub fn is_valid_password(password: &str) -> bool {
    RE_PASSWORD.is_match(password)
}
