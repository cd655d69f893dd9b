//! Field-level validation rules shared by the create and update paths.
//!
//! Each check returns `Some(message)` on failure instead of an error so that
//! callers can collect every problem from one request into a single response.

/// National ids are digit strings, 5 to 12 characters.
pub fn check_national_id(national_id: &str) -> Option<String> {
    if national_id.is_empty() || !national_id.chars().all(|c| c.is_ascii_digit()) {
        Some("The national id can only contain digits".to_string())
    } else if national_id.len() < 5 || national_id.len() > 12 {
        Some("The national id must be between 5 and 12 digits".to_string())
    } else {
        None
    }
}

/// Personal names: non-blank, letters and spaces only.
pub fn check_person_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        Some("The name cannot be blank".to_string())
    } else if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        Some("The name can only contain letters and spaces".to_string())
    } else {
        None
    }
}

/// Minimal shape check: something before an '@', a dot in the domain part.
pub fn check_email(email: &str) -> Option<String> {
    let valid = email
        .rsplit_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        None
    } else {
        Some("Invalid email format".to_string())
    }
}

/// Department codes are checked after [`normalize_code`]: 2 to 5 alphanumeric
/// characters, no spaces or symbols.
pub fn check_department_code(code: &str) -> Option<String> {
    if code.trim().is_empty() {
        Some("The code cannot be blank".to_string())
    } else if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some("The code can only contain letters and digits".to_string())
    } else if code.len() < 2 || code.len() > 5 {
        Some("The code must be between 2 and 5 characters".to_string())
    } else {
        None
    }
}

/// Uppercases a department code. Applied before the uniqueness check and
/// before persistence, and again on every lookup key.
pub fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}

pub fn check_semester(semester: i16) -> Option<String> {
    if (1..=12).contains(&semester) {
        None
    } else {
        Some("The semester must be between 1 and 12".to_string())
    }
}

pub fn check_credits(credits: i16) -> Option<String> {
    if (1..=6).contains(&credits) {
        None
    } else {
        Some("The credits must be between 1 and 6".to_string())
    }
}

pub fn check_grade(grade: f32) -> Option<String> {
    if (0.0..=5.0).contains(&grade) {
        None
    } else {
        Some("The final grade must be between 0.0 and 5.0".to_string())
    }
}

/// Generic non-blank check for required free-text fields.
pub fn check_not_blank(field: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("The {field} cannot be blank"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_id_must_be_digits_in_range() {
        assert!(check_national_id("12345").is_none());
        assert!(check_national_id("123456789012").is_none());
        assert!(check_national_id("1234").is_some());
        assert!(check_national_id("1234567890123").is_some());
        assert!(check_national_id("12a45").is_some());
        assert!(check_national_id("").is_some());
    }

    #[test]
    fn person_name_rejects_blank_and_symbols() {
        assert!(check_person_name("Ana María Ruiz").is_none());
        assert!(check_person_name("   ").is_some());
        assert!(check_person_name("R2-D2").is_some());
    }

    #[test]
    fn email_needs_local_part_and_dotted_domain() {
        assert!(check_email("ana@uni.edu").is_none());
        assert!(check_email("ana@uni").is_some());
        assert!(check_email("@uni.edu").is_some());
        assert!(check_email("ana.uni.edu").is_some());
    }

    #[test]
    fn department_code_bounds() {
        assert!(check_department_code("IN").is_none());
        assert!(check_department_code("MATH5").is_none());
        assert!(check_department_code("A").is_some());
        assert!(check_department_code("LONGER").is_some());
        assert!(check_department_code("IN G").is_some());
        assert!(check_department_code("").is_some());
    }

    #[test]
    fn normalize_code_uppercases() {
        assert_eq!(normalize_code("ing"), "ING");
        assert_eq!(normalize_code("Hum"), "HUM");
    }

    #[test]
    fn numeric_ranges() {
        assert!(check_semester(1).is_none());
        assert!(check_semester(12).is_none());
        assert!(check_semester(0).is_some());
        assert!(check_semester(13).is_some());
        assert!(check_credits(6).is_none());
        assert!(check_credits(7).is_some());
        assert!(check_grade(0.0).is_none());
        assert!(check_grade(5.0).is_none());
        assert!(check_grade(5.1).is_some());
        assert!(check_grade(-0.1).is_some());
    }
}
