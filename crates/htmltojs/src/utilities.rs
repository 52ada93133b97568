//! Utility functions and constants for HTML to JavaScript translation.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Inline event handler attributes turned into `addEventListener` calls
pub const EVENT_ATTRIBUTES: &[&str] = &[
    "onabort", "onafterprint", "onbeforeprint", "onbeforeunload", "onblur",
    "oncancel", "oncanplay", "oncanplaythrough", "onchange", "onclick",
    "oncuechange", "ondblclick", "ondurationchange", "onemptied", "onended",
    "onerror", "onfocus", "onhashchange", "oninput", "oninvalid", "onkeydown",
    "onkeypress", "onkeyup", "onload", "onloadeddata", "onloadedmetadata",
    "onloadstart", "onmessage", "onmousedown", "onmouseenter", "onmouseleave",
    "onmousemove", "onmouseout", "onmouseover", "onmouseup", "onmousewheel",
    "onoffline", "ononline", "onpagehide", "onpageshow", "onpause", "onplay",
    "onplaying", "onpopstate", "onprogress", "onratechange", "onresize",
    "onreset", "onscroll", "onseeked", "onseeking", "onselect", "onshow",
    "onstalled", "onstorage", "onsubmit", "onsuspend", "ontimeupdate",
    "onunload", "onvolumechange", "onwaiting",
];

/// Check if an attribute key is a known event handler (case-insensitive)
pub fn is_event(key: &str) -> bool {
    EVENT_ATTRIBUTES
        .iter()
        .any(|event| event.eq_ignore_ascii_case(key))
}

/// Convert a dash-separated name to camelCase (`list-style-type` -> `listStyleType`)
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, segment) in s.split('-').enumerate() {
        if i == 0 {
            result.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

// Line breaks, ASCII whitespace runs, escaped and bare double quotes.
// Alternation is leftmost-first, so a run starting with a line break is
// stripped before the rest of the run collapses. Non-breaking and other
// Unicode spaces are left alone.
static ESCAPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\r\n]|[\t\n\x0C\r ]+|\\"|""#).expect("valid escape pattern"));

/// Escape text for a double-quoted JavaScript string literal.
///
/// Carriage returns and newlines are removed, other whitespace runs collapse
/// to one space, and `"` as well as an already escaped `\"` become `\"`.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    ESCAPE_PATTERN.replace_all(s, |caps: &regex::Captures| match &caps[0] {
        "\r" | "\n" => "",
        "\"" | "\\\"" => "\\\"",
        _ => " ",
    })
}
