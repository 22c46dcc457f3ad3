//! Field-level input rules.
//!
//! These are checked by the caller before handing an entity to the store. The
//! store itself only enforces referential integrity.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .case_insensitive(true)
        .build()
        .expect("email pattern is a valid regex")
});

/// A value is present and not only whitespace.
#[must_use]
pub fn has_required_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Loose `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(value: Option<&str>) -> bool {
    value.is_some_and(|v| has_required_text(Some(v)) && EMAIL_PATTERN.is_match(v))
}

/// The deadline may fall on the start date but not before it.
#[must_use]
pub fn is_project_timeline_valid(start: NaiveDate, deadline: NaiveDate) -> bool {
    deadline >= start
}

/// An issue cannot be due in the past.
#[must_use]
pub fn is_issue_date_valid(due: NaiveDate, today: NaiveDate) -> bool {
    due >= today
}

#[cfg(test)]
mod tests {
    use chrono::Days;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(Some("anything"), true)]
    #[case(Some("  x  "), true)]
    #[case(Some(""), false)]
    #[case(Some("   "), false)]
    #[case(None, false)]
    fn required_text(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(has_required_text(value), expected);
    }

    #[rstest]
    #[case(Some("user@example.com"), true)]
    #[case(Some("first.last@sub.domain.ro"), true)]
    #[case(Some("USER@EXAMPLE.COM"), true)]
    #[case(Some("invalid-email"), false)]
    #[case(Some("user@"), false)]
    #[case(Some("user@host"), false)]
    #[case(Some("us er@example.com"), false)]
    #[case(Some(" "), false)]
    #[case(None, false)]
    fn email_shape(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[test]
    fn project_timeline() {
        let start = date(2030, 1, 10);
        assert!(is_project_timeline_valid(start, start));
        assert!(is_project_timeline_valid(start, start + Days::new(1)));
        assert!(!is_project_timeline_valid(start, start - Days::new(1)));
    }

    #[test]
    fn issue_due_date() {
        let today = date(2030, 1, 15);
        assert!(is_issue_date_valid(today, today));
        assert!(is_issue_date_valid(today + Days::new(1), today));
        assert!(!is_issue_date_valid(today - Days::new(1), today));
    }
}
