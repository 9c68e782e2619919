/// Lossy numeric parse for free-text form input.
///
/// Everything except ASCII digits, `.` and `-` is stripped, then the longest
/// leading decimal number is read. Input with no digits, or anything that
/// does not land on a finite number, reads as `0.0`. This never fails.
///
/// ```rust
/// use units::parse_value;
///
/// assert_eq!(parse_value("4 in"), 4.0);
/// assert_eq!(parse_value("1,250 psig"), 1250.0);
/// assert_eq!(parse_value("150 @ 500°F"), 150500.0);
/// assert_eq!(parse_value("n/a"), 0.0);
/// ```
pub fn parse_value(input: &str) -> f64 {
    let stripped: String = input
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();

    numeric_prefix(&stripped)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix shaped like `-?digits?(.digits?)?` containing at least one
/// digit; empty otherwise.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let mut seen_digit = false;
    let mut seen_dot = false;

    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if seen_digit {
        &text[..end]
    } else {
        ""
    }
}
