use lazy_static::lazy_static;
use regex::Regex;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const STRONG_PASSWORD_LEN: usize = 12;

/// Whitespace the way browser regex engines read `\s`. Differs from Unicode
/// White_Space: U+FEFF is included, U+0085 is not.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

lazy_static! {
    /// Something, an `@`, something, a dot, something. No whitespace anywhere.
    static ref EMAIL_REGEX: Regex = {
        let ws = BROWSER_WHITESPACE;
        Regex::new(&format!(r"^[^{ws}]+@[^{ws}]+\.[^{ws}]+$")).expect("email pattern is a valid regex")
    };
}

/// Length as an input element reports it, in UTF-16 code units.
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn name_ok(name: &str) -> bool {
    input_len(name) >= MIN_NAME_LEN
}

pub fn email_ok(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn password_ok(password: &str) -> bool {
    input_len(password) >= MIN_PASSWORD_LEN
}

pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}
