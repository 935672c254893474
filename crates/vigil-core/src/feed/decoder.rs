//! Decoding rendered feed fragments into activity records.
//!
//! The fragment's HTML shape belongs to the server's templates, not to the
//! poller. The seam is the [`FeedDecoder`] trait; [`MarkerFeedDecoder`]
//! understands the markers the dashboard templates emit today. Embedders
//! with different templates supply their own decoder.

use super::{ActivityOutcome, ActivityRecord};

/// Converts an opaque rendered feed fragment into ordered records.
///
/// Implementations must preserve the fragment's order (newest first) and
/// must not fail: a fragment that cannot be understood decodes as zero
/// records, which reads as "nothing pending" and ends the poll loop.
pub trait FeedDecoder {
    fn decode(&self, fragment: &str) -> Vec<ActivityRecord>;
}

/// Marker class emitted on activity entries still in flight.
const PENDING_MARKER: &str = "icon-spin";

/// Marker class emitted on failed activity entries.
const FAILURE_MARKER: &str = "badge-failed";

/// Attribute carrying the server-side operation code of an entry.
const CODE_ATTR: &str = "data-code=\"";

/// Decoder for the dashboard's own feed templates.
///
/// Each activity renders as an `<li>` carrying `data-code`, an `icon-spin`
/// marker while the operation is running, and a `badge-failed` marker on
/// failure. Everything else in the entry is presentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerFeedDecoder;

impl FeedDecoder for MarkerFeedDecoder {
    fn decode(&self, fragment: &str) -> Vec<ActivityRecord> {
        fragment
            .split("<li")
            .skip(1)
            .map(decode_item)
            .collect()
    }
}

fn decode_item(item: &str) -> ActivityRecord {
    let outcome = if item.contains(PENDING_MARKER) {
        ActivityOutcome::Pending
    } else if item.contains(FAILURE_MARKER) {
        ActivityOutcome::Failure
    } else {
        ActivityOutcome::Success
    };

    ActivityRecord {
        code: extract_code(item).unwrap_or_default(),
        outcome,
        rendered: strip_tags(item),
    }
}

fn extract_code(item: &str) -> Option<String> {
    let start = item.find(CODE_ATTR)? + CODE_ATTR.len();
    let rest = &item[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

/// Plain text of a rendered entry: tags dropped, whitespace collapsed.
///
/// The item starts mid-tag (the split consumed `<li`), so scanning begins
/// inside a tag and resumes text at the first `>`.
fn strip_tags(item: &str) -> String {
    let mut text = String::new();
    let mut in_tag = true;
    for ch in item.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            _ if ch.is_whitespace() => {
                if !text.ends_with(' ') && !text.is_empty() {
                    text.push(' ');
                }
            }
            _ => text.push(ch),
        }
    }
    text.trim().to_string()
}
