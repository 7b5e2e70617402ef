//! Lyrics extraction from a Genius song page.
//!
//! Lyrics live in one or more `<div data-lyrics-container="true">` blocks,
//! with `<br>` for line breaks and annotation links wrapped around lines.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const CONTAINER_MARKER: &str = "data-lyrics-container=\"true\"";
const EXCLUDED_MARKER: &str = "data-exclude-from-selection=\"true\"";
const DIV_OPEN: &str = "<div";
const DIV_CLOSE: &str = "</div>";

fn line_break_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>").expect("Invalid Regex, this should be fixed at compile time.")
    })
}

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"<[^>]*>").expect("Invalid Regex, this should be fixed at compile time.")
    })
}

fn entity_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);")
            .expect("Invalid Regex, this should be fixed at compile time.")
    })
}

/// Byte offset of the `</div>` closing the element whose content starts at
/// the beginning of `content`.
fn matching_div_end(content: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = 0;
    loop {
        let next_open = content[pos..].find(DIV_OPEN).map(|i| i + pos);
        let next_close = content[pos..].find(DIV_CLOSE).map(|i| i + pos)?;
        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                pos = open + DIV_OPEN.len();
            }
            _ => {
                if depth == 0 {
                    return Some(next_close);
                }
                depth -= 1;
                pos = next_close + DIV_CLOSE.len();
            }
        }
    }
}

/// Contents of every div carrying `marker`, in document order.
fn marked_divs<'a>(html: &'a str, marker: &str) -> Vec<(usize, &'a str, usize)> {
    let mut out = vec![];
    let mut offset = 0;
    while let Some(found) = html[offset..].find(marker) {
        let marker_pos = offset + found;
        let tag_start = html[..marker_pos].rfind('<').unwrap_or(marker_pos);
        let Some(open_end) = html[marker_pos..].find('>') else {
            break;
        };
        let content_start = marker_pos + open_end + 1;
        let Some(content_len) = matching_div_end(&html[content_start..]) else {
            break;
        };
        let element_end = content_start + content_len + DIV_CLOSE.len();
        out.push((
            tag_start,
            &html[content_start..content_start + content_len],
            element_end,
        ));
        offset = element_end;
    }
    out
}

/// Removes page furniture (contributors, headers) nested in the lyrics.
fn strip_excluded(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut last = 0;
    for (start, _, end) in marked_divs(fragment, EXCLUDED_MARKER) {
        out.push_str(&fragment[last..start]);
        last = end;
    }
    out.push_str(&fragment[last..]);
    out
}

fn decode_entities(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match entity {
                    "amp" => Some('&'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "nbsp" => Some(' '),
                    _ => None,
                }
            };
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn fragment_to_text(fragment: &str) -> String {
    let fragment = strip_excluded(fragment);
    let with_breaks = line_break_regex().replace_all(&fragment, "\n");
    let without_tags = tag_regex().replace_all(&with_breaks, "");
    decode_entities(&without_tags)
}

/// Returns the lyrics found in a song page, or `None` when the page has no
/// (or only empty) lyrics containers.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let parts: Vec<String> = marked_divs(html, CONTAINER_MARKER)
        .into_iter()
        .map(|(_, content, _)| fragment_to_text(content))
        .collect();

    let lyrics = parts.join("\n");
    let lyrics = lyrics.trim_matches('\n');
    if lyrics.trim().is_empty() {
        None
    } else {
        Some(lyrics.to_string())
    }
}
