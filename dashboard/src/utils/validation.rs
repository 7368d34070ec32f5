/// Validation utilities for user input
///
/// Everything here is pure: validators run before any network call and their
/// messages render inline next to the offending field.
use chrono::NaiveDate;

/// Largest amount the backend accepts for a single expense.
pub const MAX_EXPENSE_AMOUNT: f64 = 999_999.0;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate display name
pub fn validate_name(name: &str) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::err("Name is required");
    }

    if name.len() > 80 {
        return ValidationResult::err("Name must be less than 80 characters");
    }

    ValidationResult::ok()
}

/// Validate password strength
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_uppercase {
        return ValidationResult::err("Password must contain at least one uppercase letter");
    }

    if !has_lowercase {
        return ValidationResult::err("Password must contain at least one lowercase letter");
    }

    if !has_digit {
        return ValidationResult::err("Password must contain at least one number");
    }

    ValidationResult::ok()
}

/// Validate an expense amount as entered in the form.
///
/// The amount must parse, be strictly positive, and not exceed
/// [`MAX_EXPENSE_AMOUNT`].
pub fn validate_amount(input: &str) -> ValidationResult {
    let input = input.trim();
    if input.is_empty() {
        return ValidationResult::err("Amount is required");
    }

    let Ok(amount) = input.parse::<f64>() else {
        return ValidationResult::err("Amount must be a number");
    };

    if !amount.is_finite() {
        return ValidationResult::err("Amount must be a number");
    }

    if amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than 0");
    }

    if amount > MAX_EXPENSE_AMOUNT {
        return ValidationResult::err("Amount must be at most 999999");
    }

    ValidationResult::ok()
}

/// Validate an expense category.
pub fn validate_category(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::err("Category is required");
    }

    ValidationResult::ok()
}

/// Validate an expense date entered as `YYYY-MM-DD`.
pub fn validate_expense_date(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::err("Date is required");
    }

    if parse_expense_date(input).is_none() {
        return ValidationResult::err("Date must be YYYY-MM-DD");
    }

    ValidationResult::ok()
}

/// Parse an expense date entered as `YYYY-MM-DD`.
pub fn parse_expense_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
/// Returns `None` when nothing remains, so the payload omits the field.
pub fn parse_tags(input: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Alice").is_valid);
        assert!(validate_name("  Bob  ").is_valid);
        assert!(!validate_name("").is_valid);
        assert!(!validate_name("   ").is_valid);
        assert!(!validate_name(&"x".repeat(81)).is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("SecurePass123").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("nouppercase123").is_valid);
        assert!(!validate_password("NOLOWERCASE123").is_valid);
        assert!(!validate_password("NoDigits").is_valid);
    }

    #[test]
    fn test_amount_validation() {
        assert!(validate_amount("12.50").is_valid);
        assert!(validate_amount(" 999999 ").is_valid);
        assert!(!validate_amount("").is_valid);
        assert!(!validate_amount("abc").is_valid);
        assert!(!validate_amount("0").is_valid);
        assert!(!validate_amount("-5").is_valid);
        assert!(!validate_amount("1000000").is_valid);
        assert!(!validate_amount("inf").is_valid);
    }

    #[test]
    fn test_category_validation() {
        assert!(validate_category("groceries").is_valid);
        assert!(!validate_category("").is_valid);
        assert!(!validate_category("   ").is_valid);
    }

    #[test]
    fn test_expense_date_validation() {
        assert!(validate_expense_date("2026-07-14").is_valid);
        assert!(!validate_expense_date("").is_valid);
        assert!(!validate_expense_date("14/07/2026").is_valid);
        assert!(!validate_expense_date("2026-13-01").is_valid);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags("food, travel ,  work"),
            Some(vec![
                "food".to_string(),
                "travel".to_string(),
                "work".to_string()
            ])
        );
        assert_eq!(parse_tags(""), None);
        assert_eq!(parse_tags(" , ,"), None);
    }
}
