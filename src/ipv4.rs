use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::str::FromStr;

/// Why a CIDR string failed to parse. Checks run in a fixed order and the
/// first failing check decides the variant.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CidrParseError {
    #[error("CIDR notation invalid.")]
    MalformedCidr,
    #[error("Illegal value for prefix length. Integer expected.")]
    InvalidPrefixLength,
    #[error("Illegal value for prefix length. Should be within range [0, 32].")]
    PrefixLengthOutOfRange,
    #[error("Illegal format for IP address. Should contain 4 octets.")]
    MalformedAddress,
    #[error("Illegal value for IP address. Octet values cannot contain non-numeric characters.")]
    InvalidOctet,
    #[error("Illegal value for IP address. Octet value should be an integer within [0, 255].")]
    OctetOutOfRange,
}

/// An IPv4 CIDR block: four octets as written plus a prefix length in [0, 32].
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Ipv4Cidr {
    octets: [u8; 4],
    prefix_len: u8,
}

// Decimal integer token: optional leading minus, digits only. No plus sign,
// no whitespace, no hex/octal. Digit runs too long for i64 saturate so the
// caller's range check rejects them.
fn parse_decimal(s: &str) -> Option<i64> {
    lazy_static! {
        static ref DECIMAL: Regex = Regex::new(r"^-?[0-9]+$").expect("Not possible");
    }
    if !DECIMAL.is_match(s) {
        return None;
    }
    Some(s.parse::<i64>().unwrap_or(if s.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

impl Ipv4Cidr {
    pub fn new(octets: [u8; 4], prefix_len: u8) -> Result<Self, CidrParseError> {
        if prefix_len > 32 {
            return Err(CidrParseError::PrefixLengthOutOfRange);
        }
        Ok(Ipv4Cidr { octets, prefix_len })
    }

    /// Parses `A.B.C.D/N`, validating the prefix before the address and each
    /// octet's range before the next octet is read.
    pub fn parse(s: &str) -> Result<Self, CidrParseError> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrParseError::MalformedCidr);
        }
        let prefix_len = parse_decimal(parts[1]).ok_or(CidrParseError::InvalidPrefixLength)?;
        if prefix_len < 0 || prefix_len > 32 {
            return Err(CidrParseError::PrefixLengthOutOfRange);
        }
        let fields: Vec<&str> = parts[0].split('.').collect();
        if fields.len() != 4 {
            return Err(CidrParseError::MalformedAddress);
        }
        let mut octets = [0u8; 4];
        for (slot, field) in octets.iter_mut().zip(fields) {
            let value = parse_decimal(field).ok_or(CidrParseError::InvalidOctet)?;
            if value < 0 || value > 255 {
                return Err(CidrParseError::OctetOutOfRange);
            }
            *slot = value as u8;
        }
        Ok(Ipv4Cidr {
            octets,
            prefix_len: prefix_len as u8,
        })
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Prints the canonical form and a newline to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl FromStr for Ipv4Cidr {
    type Err = CidrParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Cidr::parse(s)
    }
}

impl Display for Ipv4Cidr {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "{}.{}.{}.{}/{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3], self.prefix_len
        )
    }
}
