use std::fmt;

use crate::rules::{input_len, MIN_PASSWORD_LEN, STRONG_PASSWORD_LEN};

/// Informational rating shown under the password input. Never blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        match input_len(password) {
            len if len >= STRONG_PASSWORD_LEN => PasswordStrength::Strong,
            len if len >= MIN_PASSWORD_LEN   => PasswordStrength::Medium,
            _                                => PasswordStrength::Weak,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PasswordStrength::Weak   => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordStrength;

    #[test]
    fn strength_by_length() {
        let cases = [
            (0, PasswordStrength::Weak),
            (5, PasswordStrength::Weak),
            (7, PasswordStrength::Weak),
            (8, PasswordStrength::Medium),
            (11, PasswordStrength::Medium),
            (12, PasswordStrength::Strong),
            (20, PasswordStrength::Strong),
        ];
        for (len, expected) in cases {
            assert_eq!(PasswordStrength::of(&"x".repeat(len)), expected, "length {len}");
        }
    }

    #[test]
    fn emoji_count_as_two_units() {
        assert_eq!(PasswordStrength::of(&"😀".repeat(3)), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::of(&"😀".repeat(4)), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::of(&"😀".repeat(6)), PasswordStrength::Strong);
    }

    #[test]
    fn strength_reads_as_a_word() {
        assert_eq!(PasswordStrength::of("password123").to_string(), "Medium");
    }
}
