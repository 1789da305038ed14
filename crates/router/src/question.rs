use crate::extract;

/// A single inbound question, normalized once: lowercased, trimmed, with
/// internal whitespace collapsed. All keyword checks and value extraction
/// run against the normalized form.
#[derive(Debug, Clone)]
pub struct Question {
    raw: String,
    normalized: String,
}

impl Question {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        Self { raw, normalized }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    #[must_use]
    pub fn value_after(&self, keyword: &str) -> Option<String> {
        extract::value_after_keyword(&self.normalized, keyword)
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        extract::year(&self.normalized)
    }

    #[must_use]
    pub fn po_number(&self) -> Option<String> {
        extract::po_number(&self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::Question;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalization_collapses_whitespace_and_lowercases() {
        let q = Question::new("  What   is the   STATUS of PO-17? ");
        assert_eq!(q.normalized(), "what is the status of po-17?");
        assert_eq!(q.raw(), "  What   is the   STATUS of PO-17? ");
    }

    #[test]
    fn hebrew_text_passes_through_normalization() {
        let q = Question::new("מה  הסטטוס של  מחלקת שיווק?");
        assert_eq!(q.normalized(), "מה הסטטוס של מחלקת שיווק?");
        assert!(q.contains("מחלקת"));
        assert_eq!(q.value_after("מחלקת"), Some("שיווק".to_string()));
    }
}
