//! Markup stripping for fetched scripture bodies.
//!
//! The remote source answers with an HTML page whose text nodes, read in
//! document order, alternate between verse labels and verse text. This
//! module reduces that page to the flat token sequence the resolver pairs
//! up; tags, comments, and inter-tag whitespace all disappear.

use log::warn;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Strip markup from `body`, returning its text tokens in document order.
///
/// Consecutive text, CDATA, and entity-reference fragments merge into one
/// token; any other markup node ends the current token. Tokens are trimmed
/// and empty ones dropped, so formatting whitespace between tags never
/// produces a token. The reader runs leniently (HTML is not well-formed
/// XML); an unrecoverable syntax error ends collection at that point rather
/// than failing the resolution.
pub fn strip_markup(body: &str) -> Vec<String> {
    let mut reader = Reader::from_str(body);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut buf = Vec::new();
    let mut tokens = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref e)) => {
                current.push_str(&String::from_utf8_lossy(e));
            }
            Ok(Event::CData(ref e)) => {
                current.push_str(&String::from_utf8_lossy(e));
            }
            Ok(Event::GeneralRef(ref e)) => {
                push_reference(&mut current, &String::from_utf8_lossy(e));
            }
            Ok(Event::Eof) => {
                flush(&mut current, &mut tokens);
                break;
            }
            Ok(_) => {
                // Tag boundary (or comment, PI, doctype): the current token ends
                flush(&mut current, &mut tokens);
            }
            Err(e) => {
                warn!(
                    "unparseable markup at byte {}: {e}; keeping {} tokens collected so far",
                    reader.buffer_position(),
                    tokens.len()
                );
                flush(&mut current, &mut tokens);
                break;
            }
        }
        buf.clear();
    }

    tokens
}

/// Finish the token being accumulated, keeping it only if non-blank.
fn flush(current: &mut String, tokens: &mut Vec<String>) {
    let token = std::mem::take(current);
    let trimmed = token.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
}

/// Append the expansion of a general entity reference, `name` given without
/// the surrounding `&`/`;`. Unknown names are kept verbatim so no body text
/// silently disappears.
fn push_reference(current: &mut String, name: &str) {
    match name {
        "amp" => current.push('&'),
        "lt" => current.push('<'),
        "gt" => current.push('>'),
        "quot" => current.push('"'),
        "apos" => current.push('\''),
        "nbsp" => current.push(' '),
        _ => {
            if let Some(resolved) = resolve_char_reference(name) {
                current.push(resolved);
            } else {
                current.push('&');
                current.push_str(name);
                current.push(';');
            }
        }
    }
}

/// Resolve a numeric character reference (`#NNN` or `#xHH`).
fn resolve_char_reference(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_nodes_in_document_order() {
        let body = "<html><body><b>1:1</b><span>In the beginning</span></body></html>";
        assert_eq!(strip_markup(body), vec!["1:1", "In the beginning"]);
    }

    #[test]
    fn test_whitespace_between_tags_dropped() {
        let body = "<body>\n  <p>1:1</p>\n  <p>text</p>\n</body>";
        assert_eq!(strip_markup(body), vec!["1:1", "text"]);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let body = "<p>  padded  </p>";
        assert_eq!(strip_markup(body), vec!["padded"]);
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(strip_markup("just text"), vec!["just text"]);
    }

    #[test]
    fn test_empty_body_yields_no_tokens() {
        assert!(strip_markup("").is_empty());
        assert!(strip_markup("<body></body>").is_empty());
    }

    #[test]
    fn test_entities_expand_within_token() {
        let body = "<p>bread &amp; wine</p>";
        assert_eq!(strip_markup(body), vec!["bread & wine"]);
    }

    #[test]
    fn test_numeric_character_reference() {
        let body = "<p>verse&#58;one</p>";
        assert_eq!(strip_markup(body), vec!["verse:one"]);
    }

    #[test]
    fn test_unknown_entity_kept_verbatim() {
        let body = "<p>a&bogus;b</p>";
        assert_eq!(strip_markup(body), vec!["a&bogus;b"]);
    }

    #[test]
    fn test_unmatched_close_tags_tolerated() {
        // Typical of the upstream's HTML
        let body = "<center><b>1:1</b></font>text</center>";
        assert_eq!(strip_markup(body), vec!["1:1", "text"]);
    }

    #[test]
    fn test_comment_splits_tokens() {
        let body = "<p>first<!-- note -->second</p>";
        assert_eq!(strip_markup(body), vec!["first", "second"]);
    }
}
