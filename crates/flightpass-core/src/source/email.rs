//! Text of mail messages: subject line followed by the body.

use mailparse::{MailHeaderMap, ParsedMail, parse_mail};
use tracing::debug;

use super::Result;

/// Parse a raw message and return its subject and body as one blob.
pub fn mail_text_from_bytes(raw: &[u8]) -> Result<String> {
    let parsed = parse_mail(raw)?;
    mail_text(&parsed)
}

/// Subject, a newline, then the body text of a parsed message.
pub fn mail_text(parsed: &ParsedMail<'_>) -> Result<String> {
    let subject = parsed
        .headers
        .get_first_value("Subject")
        .unwrap_or_default();
    let body = body_text(parsed)?;

    debug!(
        subject_len = subject.len(),
        body_len = body.len(),
        parts = parsed.subparts.len(),
        "Decoded mail message"
    );

    Ok(format!("{}\n{}", subject.trim(), body))
}

/// Extracts body text, preferring text/plain, then text/html, then the
/// first subpart.
fn body_text(parsed: &ParsedMail<'_>) -> Result<String> {
    if !parsed.subparts.is_empty() {
        for wanted in ["text/plain", "text/html"] {
            for part in &parsed.subparts {
                if part.ctype.mimetype.eq_ignore_ascii_case(wanted) {
                    if let Ok(body) = part.get_body() {
                        return Ok(body);
                    }
                }
            }
        }

        if let Some(first_part) = parsed.subparts.first() {
            return body_text(first_part);
        }
    }

    Ok(parsed.get_body()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_message() {
        let raw = b"From: bookings@example.com\r\nSubject: Flight Confirmation - Anil Gupta\r\n\r\nYour flight 6E205 DEL to BLR on 2025-02-10.";
        let text = mail_text_from_bytes(raw).unwrap();

        assert!(text.starts_with("Flight Confirmation - Anil Gupta\n"));
        assert!(text.contains("6E205 DEL to BLR"));
    }

    #[test]
    fn test_multipart_prefers_plain_text() {
        let raw = concat!(
            "Subject: Itinerary for Sara Thomas\r\n",
            "Content-Type: multipart/alternative; boundary=\"b1\"\r\n",
            "\r\n",
            "--b1\r\n",
            "Content-Type: text/html\r\n",
            "\r\n",
            "<p>HTML body UK955</p>\r\n",
            "--b1\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
            "Plain body UK955\r\n",
            "--b1--\r\n",
        );
        let text = mail_text_from_bytes(raw.as_bytes()).unwrap();

        assert!(text.contains("Plain body"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_missing_subject() {
        let raw = b"From: a@example.com\r\n\r\nSEAT: 2C";
        let text = mail_text_from_bytes(raw).unwrap();
        assert!(text.starts_with('\n'));
        assert!(text.contains("SEAT: 2C"));
    }
}
