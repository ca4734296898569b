//! Shared text patterns used by the rule modules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"\D+").unwrap();
}

/// Strip everything but ASCII digits. "(555) 867-5309" -> "5558675309"
pub fn digits_only(input: &str) -> String {
    NON_DIGIT.replace_all(input, "").into_owned()
}
