// stellar-core — Stellar transaction decode/display core
// Copyright (C) 2026 stellar-core contributors
// SPDX-License-Identifier: GPL-3.0-or-later
//! stellar-core: Stellar transaction decode/display core
//!
//! The subsystem a hardware-wallet signing companion links against to (a)
//! decode a canonically-serialized Stellar transaction from an untrusted
//! byte stream, (b) render its fields as display-ready strings for a
//! small screen, and (c) encode the strkey address family. No I/O, no
//! cryptographic signature verification, no allocation that outlives a
//! call — the only crypto this crate performs is the CRC16 strkey
//! checksum.
//!
//! Modules:
//!   crc16    — CRC16/XMODEM, the strkey checksum
//!   base32   — RFC 4648 base32 encoder
//!   strkey   — version byte + payload + CRC16, base32-encoded
//!   decimal  — up-to-256-bit signed/unsigned decimal formatter
//!   display  — summaries, asset/time/flag/price rendering
//!   xdr      — bounds-checked cursor reader over an XDR buffer
//!   tx       — the transaction envelope decoder and its `TxContent` output
//!   bstr     — fixed-capacity, allocation-free string buffer
//!   error    — the crate's single `Error` enum
//!
//! The functions below are the public API surface: the thin set of entry
//! points a transport layer calls directly (as opposed to the ones the
//! decoder calls on its own behalf while walking an envelope). Each is a
//! direct pass-through to the module that actually implements it; they
//! exist under these names because that's the external interface named
//! in this crate's governing spec.

pub mod bstr;
pub mod base32;
pub mod crc16;
pub mod decimal;
pub mod display;
pub mod error;
pub mod strkey;
pub mod tx;
pub mod xdr;

pub use error::Error;
pub use tx::{parse_tx, TxContent};

use bstr::BString;
use display::FlagKind;
use tx::{Asset, NetworkId};

/// `G...`, 56 ASCII characters.
pub fn print_public_key(raw32: &[u8; 32]) -> Result<BString<56>, Error> {
    strkey::encode_ed25519_public_key(raw32)
}

/// `C...`, 56 ASCII characters.
pub fn print_contract(raw32: &[u8; 32]) -> Result<BString<56>, Error> {
    strkey::encode_contract(raw32)
}

/// `X...`, 56 ASCII characters.
pub fn print_hash_x(raw32: &[u8; 32]) -> Result<BString<56>, Error> {
    strkey::encode_hash_x(raw32)
}

/// `T...`, 56 ASCII characters.
pub fn print_pre_auth(raw32: &[u8; 32]) -> Result<BString<56>, Error> {
    strkey::encode_pre_auth_tx(raw32)
}

/// `M...`, 69 ASCII characters.
pub fn print_muxed_account(key: &[u8; 32], id: u64) -> Result<BString<69>, Error> {
    strkey::encode_muxed_account(key, id)
}

/// `P...`, up to 165 ASCII characters.
pub fn print_signed_payload(
    key: &[u8; 32],
    payload: &[u8],
) -> Result<BString<165>, Error> {
    strkey::encode_ed25519_signed_payload(key, payload)
}

/// An amount in stroops rendered at the native 7-decimal scale, with
/// thousands separators, optionally suffixed with an asset name.
pub fn print_amount<const N: usize>(
    stroops: u64,
    asset: Option<&Asset>,
    network: NetworkId,
) -> Result<BString<N>, Error> {
    display::print_amount(stroops, asset, network)
}

/// `YYYY-MM-DD hh:mm:ss` in UTC.
pub fn print_time(seconds: u64) -> Result<BString<19>, Error> {
    display::print_time(seconds)
}

/// A `, `-separated flag list, or (for `FlagKind::AllowTrust`) a single
/// precedence-selected value.
pub fn print_flags<const N: usize>(mask: u32, kind: FlagKind) -> Result<BString<N>, Error> {
    display::print_flags(mask, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_entry_points_match_module_impls() {
        let key = [0u8; 32];
        assert_eq!(
            print_public_key(&key).unwrap().as_str(),
            strkey::encode_ed25519_public_key(&key).unwrap().as_str()
        );
        assert_eq!(print_time(0).unwrap(), "1970-01-01 00:00:00");
        let amount: BString<49> = print_amount(10_000_000, Some(&Asset::Native), NetworkId::Public).unwrap();
        assert_eq!(amount, "1 XLM");
    }
}
