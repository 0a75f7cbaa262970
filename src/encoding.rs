//! Character encoding resolution and decoding.
//!
//! Encoding names go through the WHATWG label registry, so `"UTF-8"`,
//! `"utf8"`, `"ISO-8859-1"`, `"windows-1252"` and the other registered
//! aliases all resolve; the registry is the only validator of encoding
//! names. When no encoding is named, the platform default is resolved at
//! call time from the POSIX locale environment, falling back to UTF-8.
//!
//! Decoding never fails: malformed sequences become U+FFFD replacement
//! characters and that fact is reported as a flag. A mismatched encoding
//! therefore yields garbled text, not an error.

use std::env;

pub use encoding_rs::Encoding;
use encoding_rs::UTF_8;

/// Resolve an encoding label through the WHATWG registry.
///
/// Matching is case-insensitive and whitespace-tolerant. Returns `None` for
/// labels the registry does not know.
pub fn resolve(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
}

/// The platform default encoding in effect right now.
///
/// Resolved dynamically on every call, never cached: the codeset of the
/// first set locale variable (`LC_ALL`, then `LC_CTYPE`, then `LANG`) is
/// looked up in the label registry. UTF-8 when nothing is set, when the
/// locale names no codeset (`C`, `POSIX`), or when the codeset is unknown.
pub fn platform_default() -> &'static Encoding {
    locale_codeset()
        .and_then(|codeset| Encoding::for_label(codeset.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode bytes with the given encoding.
///
/// A leading BOM of `encoding` itself is stripped; a BOM never switches the
/// decoder to a different encoding. Returns the text and whether any
/// malformed sequences were replaced with U+FFFD.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> (String, bool) {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    (text.into_owned(), had_errors)
}

/// Codeset of the current POSIX locale, if the locale names one.
fn locale_codeset() -> Option<String> {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| env::var(key).ok().filter(|value| !value.is_empty()))?;
    codeset_of(&locale).map(str::to_owned)
}

/// Extract the codeset from a locale string like `de_DE.ISO-8859-1@euro`.
fn codeset_of(locale: &str) -> Option<&str> {
    let base = locale.split_once('@').map_or(locale, |(base, _)| base);
    let (_, codeset) = base.split_once('.')?;
    (!codeset.is_empty()).then_some(codeset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_labels() {
        assert!(resolve("UTF-8").is_some());
        assert!(resolve("utf8").is_some());
        assert!(resolve("ISO-8859-1").is_some());
        assert!(resolve("windows-1252").is_some());
        assert!(resolve(" UTF-8 ").is_some());
    }

    #[test]
    fn test_resolve_unknown_label() {
        assert!(resolve("no-such-charset").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn test_decode_strips_own_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"Hello");
        let (text, had_errors) = decode(&bytes, UTF_8);
        assert_eq!(text, "Hello");
        assert!(!had_errors);
    }

    #[test]
    fn test_decode_replaces_malformed_sequences() {
        // ISO-8859-1 umlaut bytes are malformed UTF-8
        let (text, had_errors) = decode(&[0xe4, 0xf6, 0xfc], UTF_8);
        assert!(had_errors);
        assert_eq!(text, "\u{fffd}\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_decode_latin1_umlauts() {
        let latin1 = resolve("ISO-8859-1").unwrap();
        let (text, had_errors) = decode(&[0xe4, 0xf6, 0xfc], latin1);
        assert!(!had_errors);
        assert_eq!(text, "äöü");
    }

    #[test]
    fn test_codeset_of() {
        assert_eq!(codeset_of("en_US.UTF-8"), Some("UTF-8"));
        assert_eq!(codeset_of("de_DE.ISO-8859-15@euro"), Some("ISO-8859-15"));
        assert_eq!(codeset_of("de_DE@euro"), None);
        assert_eq!(codeset_of("C"), None);
        assert_eq!(codeset_of("POSIX"), None);
        assert_eq!(codeset_of("en_US."), None);
    }

    #[test]
    fn test_platform_default_round_trips() {
        // Plain ASCII is representable in every codeset a locale can name,
        // so this holds regardless of the environment the tests run under.
        let default = platform_default();
        let (bytes, _, _) = default.encode("platform default sample");
        let (text, had_errors) = decode(&bytes, default);
        assert!(!had_errors);
        assert_eq!(text, "platform default sample");
    }
}
