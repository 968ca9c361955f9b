//! Human-readable rendering of a [`NormalizedResponse`].
//!
//! The block layout is fixed:
//!
//! ```text
//! Response ID: r1
//! Model: gpt-4o
//! Created at: 2023-11-14 22:13:20 UTC
//!
//! Instructions:        <- only when the endpoint echoed instructions
//! ...
//!
//! Output Text:
//! Hi
//!
//! Token Usage:
//! Input tokens: 2
//! Output tokens: 1
//! Total tokens: 3
//! ```
//!
//! [`parse_formatted`] reads the same layout back.

use crate::core_types::response::{NormalizedResponse, TokenUsage};
use crate::error::{ResponsesError, ResponsesResult};
use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

const ID_LABEL: &str = "Response ID: ";
const MODEL_LABEL: &str = "Model: ";
const CREATED_LABEL: &str = "Created at: ";
const INSTRUCTIONS_HEADER: &str = "Instructions:\n";
const OUTPUT_HEADER: &str = "Output Text:\n";
const USAGE_HEADER: &str = "\n\nToken Usage:\n";
const INPUT_LABEL: &str = "Input tokens: ";
const OUTPUT_LABEL: &str = "Output tokens: ";
const TOTAL_LABEL: &str = "Total tokens: ";

/// Render `response` as a newline-delimited block.
pub fn format_response(response: &NormalizedResponse) -> String {
    let mut out = String::new();
    out.push_str(&format!("{ID_LABEL}{}\n", response.id));
    out.push_str(&format!("{MODEL_LABEL}{}\n", response.model));
    out.push_str(&format!(
        "{CREATED_LABEL}{}\n",
        format_created_at(response.created_at)
    ));
    out.push('\n');

    if let Some(instructions) = response.instructions.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(INSTRUCTIONS_HEADER);
        out.push_str(instructions);
        out.push_str("\n\n");
    }

    out.push_str(OUTPUT_HEADER);
    out.push_str(&response.output_text);
    out.push_str(USAGE_HEADER);
    out.push_str(&format!("{INPUT_LABEL}{}\n", response.usage.input_tokens));
    out.push_str(&format!("{OUTPUT_LABEL}{}\n", response.usage.output_tokens));
    out.push_str(&format!("{TOTAL_LABEL}{}\n", response.usage.total_tokens));
    out
}

/// Render epoch seconds as a UTC date, or the raw number when the date
/// cannot be written in four-digit-year form.
pub fn format_created_at(created_at: i64) -> String {
    match DateTime::<Utc>::from_timestamp(created_at, 0) {
        Some(ts) if (0..=9999).contains(&ts.year()) => ts.format(CREATED_AT_FORMAT).to_string(),
        _ => created_at.to_string(),
    }
}

fn parse_created_at(value: &str) -> Option<i64> {
    if let Ok(seconds) = value.parse::<i64>() {
        return Some(seconds);
    }
    NaiveDateTime::parse_from_str(value, CREATED_AT_FORMAT)
        .ok()
        .map(|ts| ts.and_utc().timestamp())
}

/// Parse a block produced by [`format_response`].
///
/// The instructions block ends at the first blank line followed by
/// `Output Text:`. Instructions that themselves contain that sequence do not
/// survive a round trip: the remainder is read as part of the output text.
/// Output text has no such restriction, since the usage block is located
/// from the end.
///
/// # Errors
///
/// Returns [`ResponsesError::InvalidRequest`] when the text does not follow
/// the layout.
pub fn parse_formatted(text: &str) -> ResponsesResult<NormalizedResponse> {
    let (header, body) = text
        .split_once("\n\n")
        .ok_or_else(|| malformed("missing blank line after header"))?;

    let mut header_lines = header.lines();
    let id = labelled(header_lines.next(), ID_LABEL)?;
    let model = labelled(header_lines.next(), MODEL_LABEL)?;
    let created_raw = labelled(header_lines.next(), CREATED_LABEL)?;
    if header_lines.next().is_some() {
        return Err(malformed("unexpected line in header"));
    }
    let created_at = parse_created_at(created_raw)
        .ok_or_else(|| malformed(format!("unreadable creation time '{created_raw}'")))?;

    let (instructions, body) = match body.strip_prefix(INSTRUCTIONS_HEADER) {
        Some(rest) => {
            let end = rest
                .find(&format!("\n\n{OUTPUT_HEADER}"))
                .ok_or_else(|| malformed("instructions block is not terminated"))?;
            (Some(rest[..end].to_string()), &rest[end + 2..])
        }
        None => (None, body),
    };

    let body = body
        .strip_prefix(OUTPUT_HEADER)
        .ok_or_else(|| malformed("missing 'Output Text:' section"))?;
    let usage_start = body
        .rfind(USAGE_HEADER)
        .ok_or_else(|| malformed("missing 'Token Usage:' section"))?;
    let output_text = body[..usage_start].to_string();

    let mut usage_lines = body[usage_start + USAGE_HEADER.len()..].lines();
    let input_tokens = count(labelled(usage_lines.next(), INPUT_LABEL)?)?;
    let output_tokens = count(labelled(usage_lines.next(), OUTPUT_LABEL)?)?;
    let total_tokens = count(labelled(usage_lines.next(), TOTAL_LABEL)?)?;
    if usage_lines.any(|line| !line.is_empty()) {
        return Err(malformed("unexpected line after token usage"));
    }

    Ok(NormalizedResponse {
        id: id.to_string(),
        model: model.to_string(),
        created_at,
        output_text,
        usage: TokenUsage {
            input_tokens,
            output_tokens,
            total_tokens,
        },
        instructions,
    })
}

fn labelled<'a>(line: Option<&'a str>, label: &str) -> ResponsesResult<&'a str> {
    line.and_then(|l| l.strip_prefix(label))
        .ok_or_else(|| malformed(format!("expected '{}' line", label.trim_end())))
}

fn count(value: &str) -> ResponsesResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| malformed(format!("invalid token count '{value}': {e}")))
}

fn malformed(detail: impl std::fmt::Display) -> ResponsesError {
    ResponsesError::invalid_request(format!("Malformed formatted response: {detail}"))
}
