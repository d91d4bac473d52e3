use crate::features::registration::types::*;

/// Symbols accepted by the password rule.
pub const PASSWORD_SYMBOLS: &str = "#?!@$%^&*-";

/// Validates the username: required, length in [3, 20] inclusive.
pub fn validate_username(username: &str) -> Option<String> {
    if username.is_empty() {
        return Some("Username field is required!".to_string());
    }

    let length = username.chars().count();
    if !(3..=20).contains(&length) {
        return Some("The username must be between 3 and 20 characters.".to_string());
    }

    None
}

/// Validates the email address shape: exactly one `@`, a non-empty local
/// part, and a domain containing at least one dot.
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email field is required!".to_string());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Some("This is not a valid email.".to_string());
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    if local_part.is_empty() || !domain_part.contains('.') || domain_part.len() <= 2 {
        return Some("This is not a valid email.".to_string());
    }

    None
}

/// Validates the password: at least one uppercase letter, one lowercase
/// letter, one digit, one symbol from [`PASSWORD_SYMBOLS`], minimum length 6.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password field is required!".to_string());
    }

    let long_enough = password.chars().count() >= 6;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if !(long_enough && has_uppercase && has_lowercase && has_digit && has_symbol) {
        return Some(
            "Password must contain minimum 6 characters, one special character, one digit and one uppercase character."
                .to_string(),
        );
    }

    None
}

/// Runs every field rule against the candidate input. Submission must be
/// blocked whenever the result has any error.
pub fn validate_registration(input: &RegistrationInput) -> FieldErrors {
    FieldErrors {
        username: validate_username(&input.username),
        email: validate_email(&input.email),
        password: validate_password(&input.password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_required() {
        assert_eq!(
            validate_username(""),
            Some("Username field is required!".to_string())
        );
    }

    #[test]
    fn test_username_length_bounds() {
        // Too short
        assert_eq!(
            validate_username("ab"),
            Some("The username must be between 3 and 20 characters.".to_string())
        );
        // Too long (21 characters)
        assert_eq!(
            validate_username(&"a".repeat(21)),
            Some("The username must be between 3 and 20 characters.".to_string())
        );
        // Boundaries are inclusive
        assert_eq!(validate_username("abc"), None);
        assert_eq!(validate_username(&"a".repeat(20)), None);
    }

    #[test]
    fn test_email_required() {
        assert_eq!(
            validate_email(""),
            Some("Email field is required!".to_string())
        );
    }

    #[test]
    fn test_email_shape() {
        let invalid = Some("This is not a valid email.".to_string());

        assert_eq!(validate_email("not-an-email"), invalid);
        assert_eq!(validate_email("two@@signs.com"), invalid);
        assert_eq!(validate_email("@no-local.com"), invalid);
        assert_eq!(validate_email("no-dot@domain"), invalid);

        assert_eq!(validate_email("a@b.com"), None);
        assert_eq!(validate_email("user.name@example.co.uk"), None);
    }

    #[test]
    fn test_password_required() {
        assert_eq!(
            validate_password(""),
            Some("Password field is required!".to_string())
        );
    }

    #[test]
    fn test_password_missing_any_class_is_rejected() {
        // Each candidate fails exactly one of the five requirements
        let candidates = [
            "abc123!", // no uppercase
            "ABC123!", // no lowercase
            "Abcdef!", // no digit
            "Abc1234", // no symbol
            "Ab1!",    // too short
        ];

        for candidate in candidates {
            assert!(
                validate_password(candidate).is_some(),
                "expected '{}' to be rejected",
                candidate
            );
        }
    }

    #[test]
    fn test_password_accepts_all_symbols() {
        for symbol in PASSWORD_SYMBOLS.chars() {
            let password = format!("Abc12{}", symbol);
            assert_eq!(validate_password(&password), None);
        }
    }

    #[test]
    fn test_valid_input_produces_no_errors() {
        let input = RegistrationInput {
            username: "abc".to_string(),
            email: "a@b.com".to_string(),
            password: "Abc123!".to_string(),
        };

        let errors = validate_registration(&input);
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_invalid_input_reports_every_offending_field() {
        let input = RegistrationInput {
            username: "ab".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
        };

        let errors = validate_registration(&input);
        assert!(errors.username.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }
}
