//! Server error text shown under a form
//!
//! The backend reports rejected submissions through the status text, e.g.
//! `Bad Request: data/firstName must NOT have more than 64 characters`. Forms
//! display it as `First Name must NOT have more than 64 characters`.

const BAD_REQUEST_PREFIX: &str = "Bad Request: data/";
const FORBIDDEN_PREFIX: &str = "Forbidden: ";

/// Turn backend status text into a sentence for the form's error line
pub fn format_server_response(message: &str) -> String {
    let stripped = message
        .replacen(BAD_REQUEST_PREFIX, "", 1)
        .replacen(FORBIDDEN_PREFIX, "", 1);

    let (first, rest) = match stripped.split_once(' ') {
        Some((first, rest)) => (first, Some(rest)),
        None => (stripped.as_str(), None),
    };

    let mut chars = first.chars();
    let Some(head) = chars.next() else {
        return stripped;
    };

    let mut sentence: String = head.to_uppercase().collect();
    for c in chars {
        if c.is_ascii_uppercase() {
            sentence.push(' ');
        }
        sentence.push(c);
    }

    if let Some(rest) = rest {
        sentence.push(' ');
        sentence.push_str(rest);
    }
    sentence
}
