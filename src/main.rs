use cidr4::ipv4::Ipv4Cidr;
use std::io::{self, BufRead};
use std::str::FromStr;

fn main() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if let Ok(l) = line {
            match Ipv4Cidr::from_str(&l) {
                Ok(cidr) => cidr.display(),
                Err(e) => eprintln!("{}: {}", l, e),
            }
        }
    }
}
