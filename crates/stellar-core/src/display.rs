// stellar-core — Stellar transaction decode/display core
// Copyright (C) 2026 stellar-core contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//
// display: render decoded fields as fixed-width, display-ready strings
//
// Ported from printer.c's print_summary/print_binary/print_asset_name/
// print_asset/print_time/print_account_flags/print_trust_line_flags/
// print_allow_trust_flags/print_price/is_printable_binary. Time conversion
// is an explicit UTC calendar computation (Howard Hinnant's civil_from_days)
// rather than a locale-sensitive libc call, since the original's
// `gmtime_r` has no equivalent this crate is willing to depend on.

use crate::bstr::BString;
use crate::decimal;
use crate::error::Error;
use crate::tx::{Asset, NetworkId};

/// Elide a long ASCII string as `left..right`; pass through unchanged if
/// it already fits in `num_chars_l + num_chars_r + 2`.
pub fn summary<const N: usize>(src: &str, num_chars_l: usize, num_chars_r: usize) -> Result<BString<N>, Error> {
    let result_len = num_chars_l + num_chars_r + 2;
    let mut out = BString::<N>::new();
    if src.len() > result_len {
        out.push_str(&src[..num_chars_l])?;
        out.push_str("..")?;
        out.push_str(&src[src.len() - num_chars_r..])?;
    } else {
        out.push_str(src)?;
    }
    Ok(out)
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex of `bytes`, optionally summarized to `num_chars_l`/
/// `num_chars_r` hex characters either side of `..`.
pub fn print_binary<const N: usize>(
    bytes: &[u8],
    num_chars_l: usize,
    num_chars_r: usize,
) -> Result<BString<N>, Error> {
    let mut hex_buf = [0u8; 72]; // BINARY_MAX_SIZE(36) * 2
    if bytes.len() * 2 > hex_buf.len() {
        return Err(Error::BufferTooSmall);
    }
    for (i, b) in bytes.iter().enumerate() {
        hex_buf[i * 2] = HEX_DIGITS[(b >> 4) as usize];
        hex_buf[i * 2 + 1] = HEX_DIGITS[(b & 0x0F) as usize];
    }
    let hex_str = core::str::from_utf8(&hex_buf[..bytes.len() * 2]).unwrap_or("");

    if num_chars_l > 0 {
        summary::<N>(hex_str, num_chars_l, num_chars_r)
    } else {
        BString::from_str(hex_str)
    }
}

/// The fixed hash-summary geometry used for memo hash/return and
/// pre-auth/hash(x) signer rendering: 3 bytes (6 hex chars) on each side
/// of the `..` (e.g. a 32-byte hash summarizes to `"000102..1D1E1F"`).
pub fn print_hash_summary(hash: &[u8; 32]) -> Result<BString<15>, Error> {
    print_binary::<15>(hash, 6, 6)
}

/// The account-id summary geometry used for destination/trustor/signer
/// rendering in `op_details` throughout the transaction decoder: 3 chars
/// .. 3 chars (e.g. `"GBB..BBB"`).
pub fn print_account_id_summary(strkey: &str) -> Result<BString<9>, Error> {
    summary::<9>(strkey, 3, 3)
}

/// The wider geometry used specifically for the transaction-level
/// source-account summary (`tx_details[3]`): 6 chars .. 5 chars.
pub fn print_source_account_summary(strkey: &str) -> Result<BString<13>, Error> {
    summary::<13>(strkey, 6, 5)
}

/// The distinct geometry used only for an asset's issuer inside
/// `print_asset`: 3 chars .. 4 chars.
fn print_asset_issuer_summary(strkey: &str) -> Result<BString<10>, Error> {
    summary::<10>(strkey, 3, 4)
}

pub fn print_asset_name<const N: usize>(asset: &Asset, network: NetworkId) -> Result<BString<N>, Error> {
    let mut out = BString::<N>::new();
    match asset {
        Asset::Native => {
            if network == NetworkId::Unknown {
                out.push_str("native")?;
            } else {
                out.push_str("XLM")?;
            }
        }
        Asset::CreditAlphanum4 { code, .. } => {
            let end = code.iter().position(|&b| b == 0).unwrap_or(4);
            out.push_bytes(&code[..end])?;
        }
        Asset::CreditAlphanum12 { code, .. } => {
            let end = code.iter().position(|&b| b == 0).unwrap_or(12);
            out.push_bytes(&code[..end])?;
        }
    }
    Ok(out)
}

/// `CODE` for native, `CODE@ISSUER_SUMMARY` otherwise (issuer summary is
/// the fixed 3..4 strkey geometry).
pub fn print_asset<const N: usize>(asset: &Asset, network: NetworkId) -> Result<BString<N>, Error> {
    let mut out = BString::<N>::new();
    let code: BString<12> = print_asset_name(asset, network)?;
    out.push_str(code.as_str())?;

    let issuer = match asset {
        Asset::Native => None,
        Asset::CreditAlphanum4 { issuer, .. } => Some(issuer),
        Asset::CreditAlphanum12 { issuer, .. } => Some(issuer),
    };
    if let Some(issuer) = issuer {
        let key = crate::strkey::encode_ed25519_public_key(issuer)?;
        let issuer_summary = print_asset_issuer_summary(key.as_str())?;
        out.push_byte(b'@')?;
        out.push_str(issuer_summary.as_str())?;
    }
    Ok(out)
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Howard Hinnant's `civil_from_days`: proleptic-Gregorian days-since-epoch
/// to (year, month, day), valid for the whole range this crate accepts.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

fn push_padded(out: &mut BString<19>, value: u32, width: usize) -> Result<(), Error> {
    let mut digits = [0u8; 10];
    let mut n = value;
    let mut i = digits.len();
    loop {
        i -= 1;
        digits[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let written = digits.len() - i;
    for _ in written..width {
        out.push_byte(b'0')?;
    }
    out.push_bytes(&digits[i..])
}

/// `YYYY-MM-DD hh:mm:ss` in UTC for a Unix second count in
/// `[0, 253402300799]` (1970-01-01 through 9999-12-31).
pub fn print_time(seconds: u64) -> Result<BString<19>, Error> {
    if seconds > 253_402_300_799 {
        return Err(Error::OutOfRange);
    }
    let days = (seconds / SECONDS_PER_DAY as u64) as i64;
    let secs_of_day = seconds % SECONDS_PER_DAY as u64;
    let (year, month, day) = civil_from_days(days);
    let hour = (secs_of_day / 3600) as u32;
    let minute = ((secs_of_day % 3600) / 60) as u32;
    let second = (secs_of_day % 60) as u32;

    let mut out = BString::<19>::new();
    push_padded(&mut out, year as u32, 4)?;
    out.push_byte(b'-')?;
    push_padded(&mut out, month, 2)?;
    out.push_byte(b'-')?;
    push_padded(&mut out, day, 2)?;
    out.push_byte(b' ')?;
    push_padded(&mut out, hour, 2)?;
    out.push_byte(b':')?;
    push_padded(&mut out, minute, 2)?;
    out.push_byte(b':')?;
    push_padded(&mut out, second, 2)?;
    Ok(out)
}

const FLAG_AUTHORIZED: u32 = 1;
const FLAG_AUTHORIZED_TO_MAINTAIN_LIABILITIES: u32 = 1 << 1;
const FLAG_TRUSTLINE_CLAWBACK_ENABLED: u32 = 1 << 2;

const ACCOUNT_FLAG_AUTH_REQUIRED: u32 = 1;
const ACCOUNT_FLAG_AUTH_REVOCABLE: u32 = 1 << 1;
const ACCOUNT_FLAG_AUTH_IMMUTABLE: u32 = 1 << 2;
const ACCOUNT_FLAG_AUTH_CLAWBACK_ENABLED: u32 = 1 << 3;

fn append_flag<const N: usize>(out: &mut BString<N>, flag: &str) -> Result<(), Error> {
    if !out.is_empty() {
        out.push_str(", ")?;
    }
    out.push_str(flag)
}

pub fn print_account_flags<const N: usize>(flags: u32) -> Result<BString<N>, Error> {
    let mut out = BString::<N>::new();
    if flags & ACCOUNT_FLAG_AUTH_REQUIRED != 0 {
        append_flag(&mut out, "AUTH_REQUIRED")?;
    }
    if flags & ACCOUNT_FLAG_AUTH_REVOCABLE != 0 {
        append_flag(&mut out, "AUTH_REVOCABLE")?;
    }
    if flags & ACCOUNT_FLAG_AUTH_IMMUTABLE != 0 {
        append_flag(&mut out, "AUTH_IMMUTABLE")?;
    }
    if flags & ACCOUNT_FLAG_AUTH_CLAWBACK_ENABLED != 0 {
        append_flag(&mut out, "AUTH_CLAWBACK_ENABLED")?;
    }
    Ok(out)
}

pub fn print_trust_line_flags<const N: usize>(flags: u32) -> Result<BString<N>, Error> {
    let mut out = BString::<N>::new();
    if flags & FLAG_AUTHORIZED != 0 {
        append_flag(&mut out, "AUTHORIZED")?;
    }
    if flags & FLAG_AUTHORIZED_TO_MAINTAIN_LIABILITIES != 0 {
        append_flag(&mut out, "AUTHORIZED_TO_MAINTAIN_LIABILITIES")?;
    }
    if flags & FLAG_TRUSTLINE_CLAWBACK_ENABLED != 0 {
        append_flag(&mut out, "TRUSTLINE_CLAWBACK_ENABLED")?;
    }
    Ok(out)
}

/// Chooses exactly one of the three by precedence, matching the firmware's
/// `print_allow_trust_flags`.
pub fn print_allow_trust_flags<const N: usize>(flag: u32) -> Result<BString<N>, Error> {
    let mut out = BString::<N>::new();
    if flag & FLAG_AUTHORIZED != 0 {
        out.push_str("AUTHORIZED")?;
    } else if flag & FLAG_AUTHORIZED_TO_MAINTAIN_LIABILITIES != 0 {
        out.push_str("AUTHORIZED_TO_MAINTAIN_LIABILITIES")?;
    } else {
        out.push_str("UNAUTHORIZED")?;
    }
    Ok(out)
}

/// Selects which fixed dictionary `print_flags` composes its `, `-joined
/// list from (account-level flags vs. trust-line flags), or the
/// precedence-based single-value form `allow-trust` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Account,
    TrustLine,
    AllowTrust,
}

/// The `print_flags(mask, kind)` entry point named in the external
/// interface (§6): dispatches to whichever fixed dictionary `kind`
/// selects.
pub fn print_flags<const N: usize>(mask: u32, kind: FlagKind) -> Result<BString<N>, Error> {
    match kind {
        FlagKind::Account => print_account_flags(mask),
        FlagKind::TrustLine => print_trust_line_flags(mask),
        FlagKind::AllowTrust => print_allow_trust_flags(mask),
    }
}

/// Amount scaled to the native 7-decimal Stellar unit, with thousands
/// separators, optionally suffixed with an asset name.
pub fn print_amount<const N: usize>(
    stroops: u64,
    asset: Option<&Asset>,
    network: NetworkId,
) -> Result<BString<N>, Error> {
    let d = decimal::format_unsigned(&stroops.to_be_bytes(), 7, true)?;
    let mut out = BString::<N>::new();
    out.push_str(d.as_str())?;
    if let Some(asset) = asset {
        out.push_byte(b' ')?;
        let name: BString<49> = print_asset(asset, network)?;
        out.push_str(name.as_str())?;
    }
    Ok(out)
}

/// `n * 10^7 / d`, rendered as a plain integer (no further decimal-point
/// insertion — the `10^7` factor is the native scale itself, not an
/// amount to be re-scaled), optionally followed by ` A/B`.
pub fn print_price<const N: usize>(
    n: u32,
    d: u32,
    asset_a: Option<&Asset>,
    asset_b: Option<&Asset>,
    network: NetworkId,
) -> Result<BString<N>, Error> {
    let scaled = (n as u64) * 10_000_000 / (d as u64);
    let digits = decimal::format_unsigned(&scaled.to_be_bytes(), 0, false)?;
    let mut out = BString::<N>::new();
    out.push_str(digits.as_str())?;
    if let (Some(a), Some(b)) = (asset_a, asset_b) {
        out.push_byte(b' ')?;
        let name_a: BString<12> = print_asset_name(a, network)?;
        out.push_str(name_a.as_str())?;
        out.push_byte(b'/')?;
        let name_b: BString<12> = print_asset_name(b, network)?;
        out.push_str(name_b.as_str())?;
    }
    Ok(out)
}

pub fn is_printable(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| (0x20..=0x7e).contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_passthrough_when_short() {
        let s: BString<32> = summary("short", 3, 4).unwrap();
        assert_eq!(s, "short");
    }

    #[test]
    fn summary_elides_when_long() {
        let long = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
        let s: BString<12> = summary(long, 5, 4).unwrap();
        assert_eq!(s.len(), 11);
        assert!(s.as_str().ends_with(".."));
    }

    #[test]
    fn source_account_summary_geometry() {
        let key = [0xAAu8; 32];
        let encoded = crate::strkey::encode_ed25519_public_key(&key).unwrap();
        let s = print_source_account_summary(encoded.as_str()).unwrap();
        assert_eq!(s.len(), 13);
        assert_eq!(&s.as_str()[..6], &encoded.as_str()[..6]);
        assert_eq!(&s.as_str()[8..], &encoded.as_str()[51..]);
    }

    #[test]
    fn hash_summary_geometry() {
        let mut hash = [0u8; 32];
        for (i, b) in hash.iter_mut().enumerate() {
            *b = i as u8;
        }
        let s = print_hash_summary(&hash).unwrap();
        assert_eq!(s, "000102..1D1E1F");
    }

    #[test]
    fn time_epoch_and_max() {
        assert_eq!(print_time(0).unwrap(), "1970-01-01 00:00:00");
        assert_eq!(print_time(253_402_300_799).unwrap(), "9999-12-31 23:59:59");
        assert!(print_time(253_402_300_800).is_err());
    }

    #[test]
    fn printable_ascii_range() {
        assert!(is_printable(b"hello world"));
        assert!(!is_printable(&[0x1f]));
        assert!(!is_printable(&[0x7f]));
    }

    #[test]
    fn allow_trust_precedence() {
        let s: BString<40> = print_allow_trust_flags(FLAG_AUTHORIZED | FLAG_TRUSTLINE_CLAWBACK_ENABLED).unwrap();
        assert_eq!(s, "AUTHORIZED");
        let s: BString<40> = print_allow_trust_flags(0).unwrap();
        assert_eq!(s, "UNAUTHORIZED");
    }

    #[test]
    fn print_flags_dispatches_by_kind() {
        let s: BString<40> =
            print_flags(ACCOUNT_FLAG_AUTH_REQUIRED | ACCOUNT_FLAG_AUTH_REVOCABLE, FlagKind::Account).unwrap();
        assert_eq!(s, "AUTH_REQUIRED, AUTH_REVOCABLE");

        let s: BString<40> = print_flags(FLAG_AUTHORIZED, FlagKind::TrustLine).unwrap();
        assert_eq!(s, "AUTHORIZED");

        let s: BString<40> = print_flags(0, FlagKind::AllowTrust).unwrap();
        assert_eq!(s, "UNAUTHORIZED");
    }
}
