//! Common regex patterns for bill line reconstruction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Full item line: <name> <qty> <rate> <discount> <net>.
    // The name is greedy and ends before the first of the four trailing
    // numeric-looking tokens; qty is a plain decimal/integer while rate,
    // discount and net tolerate signs, commas and dots from OCR.
    pub static ref FULL_ITEM: Regex = Regex::new(
        r"^(?P<prefix>.*\S)\s+(?P<qty>\d+(?:\.\d+)?)\s+(?P<rate>[-\d,.]+)\s+(?P<discount>[-\d,.]+)\s+(?P<net>[-\d,.]+)\s*$"
    ).unwrap();

    // Continuation line: optional text followed by a single trailing
    // numeric token (often the bare amount on its own line). Only
    // meaningful when a wrapped item name is pending.
    pub static ref AMOUNT_ONLY: Regex = Regex::new(
        r"^(?:(?P<prefix>.*\S)\s+)?(?P<net>[-\d,.]+)\s*$"
    ).unwrap();

    // Generic numeric token: optional sign, then decimal or integer.
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[-+]?(?:\d*\.\d+|\d+)"
    ).unwrap();

    // Name scrubbing for dedup keys.
    pub static ref NON_ALNUM: Regex = Regex::new(
        r"[^a-zA-Z0-9 ]+"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();
}
