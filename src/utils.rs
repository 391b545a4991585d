/// true if the token is a non-empty run of ascii digits. Signs, decimal
/// points and exponents all disqualify a token.
pub(crate) fn is_unsigned_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// whitespace as understood by plot3d writers. This is the ascii set,
/// including vertical tab which `char::is_ascii_whitespace` leaves out
pub(crate) fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
