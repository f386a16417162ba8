/// Case-insensitive substring matcher.
#[derive(Debug, Clone)]
pub struct ContainsMatcher {
    keyword: String,
}

impl ContainsMatcher {
    /// The keyword is normalized to lower case once at construction.
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }

    pub fn matches(&self, field_name: &str) -> bool {
        field_name.to_lowercase().contains(&self.keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let matcher = ContainsMatcher::new("password");
        assert!(matcher.matches("password"));
        assert!(matcher.matches("user_password"));
        assert!(matcher.matches("password_hint"));
        assert!(!matcher.matches("username"));
    }

    #[test]
    fn test_case_insensitive_both_sides() {
        let matcher = ContainsMatcher::new("SSN");
        assert!(matcher.matches("ssn"));
        assert!(matcher.matches("patient_Ssn"));

        let matcher = ContainsMatcher::new("name");
        assert!(matcher.matches("FirstName"));
    }

    #[test]
    fn test_empty_field_name() {
        assert!(!ContainsMatcher::new("key").matches(""));
        // An empty keyword is contained in everything, including "".
        assert!(ContainsMatcher::new("").matches(""));
    }
}
