/// Extension trait for case-insensitive string handling.
pub trait IgnoreCaseExt {
    /// Returns a locale-independent case folded equivalent of the string,
    /// suitable for comparing and ordering caselessly.
    fn to_folded_case(&self) -> String;

    /// Checks two strings for equality, ignoring case.
    fn eq_ignore_case(&self, other: &str) -> bool;
}

impl IgnoreCaseExt for str {
    fn to_folded_case(&self) -> String {
        self.to_lowercase()
    }

    fn eq_ignore_case(&self, other: &str) -> bool {
        self.to_folded_case() == other.to_folded_case()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_mixed_case_to_a_single_representation() {
        assert_eq!("FrODO".to_folded_case(), "frodo");
        assert!("FrODO".eq_ignore_case("frodo"));
        assert!(!"Frodo".eq_ignore_case("Sam"));
    }
}
