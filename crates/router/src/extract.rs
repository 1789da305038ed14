//! Pulls structured values out of a normalized question string.

/// The remainder after the first occurrence of `keyword`, trimmed and cut
/// at the next `?`. Returns `None` when the keyword is absent or nothing
/// usable follows it. Only the first occurrence is considered.
#[must_use]
pub fn value_after_keyword(question: &str, keyword: &str) -> Option<String> {
    let start = question.find(keyword)? + keyword.len();
    let rest = question[start..].trim();
    let value = rest.split('?').next().unwrap_or("").trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// First whitespace token that is exactly four ASCII digits. No range
/// validation: "9999" is a year.
#[must_use]
pub fn year(question: &str) -> Option<i32> {
    question
        .split_whitespace()
        .find(|token| token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

/// First whitespace token carrying a purchase-order number (`po-` prefix
/// pattern), returned verbatim.
#[must_use]
pub fn po_number(question: &str) -> Option<String> {
    question
        .split_whitespace()
        .find(|token| token.to_lowercase().contains("po-"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_stops_at_question_mark() {
        assert_eq!(
            value_after_keyword("מה התקציב של מחלקת שיווק?", "מחלקת"),
            Some("שיווק".to_string())
        );
    }

    #[test]
    fn value_takes_first_occurrence_only() {
        assert_eq!(
            value_after_keyword("לקוח דוד הזמין עבור לקוח אחר", "לקוח"),
            Some("דוד הזמין עבור לקוח אחר".to_string())
        );
    }

    #[test]
    fn absent_keyword_or_empty_remainder_yields_none() {
        assert_eq!(value_after_keyword("מה קורה", "מחלקת"), None);
        assert_eq!(value_after_keyword("מה המצב של מחלקת ?", "מחלקת"), None);
        assert_eq!(value_after_keyword("מחלקת", "מחלקת"), None);
    }

    #[test]
    fn year_finds_first_four_digit_token() {
        assert_eq!(year("תקציב מחלקת שיווק 2023 בבקשה"), Some(2023));
        assert_eq!(year("הוצאות 2022 לעומת 2023"), Some(2022));
        assert_eq!(year("שנה 9999 מתקבלת"), Some(9999));
    }

    #[test]
    fn year_ignores_other_tokens() {
        assert_eq!(year("אין כאן שנה"), None);
        assert_eq!(year("מספר 12345 ארוך מדי"), None);
        assert_eq!(year("123 קצר מדי"), None);
    }

    #[test]
    fn po_number_scans_tokens_for_the_prefix() {
        assert_eq!(
            po_number("מה הסטטוס של תעודת הרכש po-1042?"),
            Some("po-1042?".to_string())
        );
        assert_eq!(po_number("תעודת הרכש האחרונה"), None);
    }
}
