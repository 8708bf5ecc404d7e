//! Extraction of AprilTag family code tables from reference C sources.
//!
//! This crate converts the trusted `<family>.c` reference documents into
//! compact binary artifacts (`<family>.bin`) consumed by the tag-generation
//! pipeline:
//! - the fixed registry of the eight reference families,
//! - regex extraction of the `uint64_t` codes array from C source text,
//! - the flat little-endian `u64` artifact format (both directions),
//! - the per-family conversion loop with its two-tier error policy
//!   (skip on a missing document, abort on a malformed one).
//!
//! It does **not** detect, decode, or validate tags; the reference data is
//! trusted as-is.

mod convert;
mod extract;
mod family;
mod pack;

pub use convert::{convert_all, convert_families, ConvertError, FamilyReport};
pub use extract::{extract_codes, ExtractError};
pub use family::{Family, UnknownFamily};
pub use pack::{decode_codes, encode_codes, write_bin, DecodeError};
