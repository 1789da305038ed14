use crate::document::Document;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use nexora_protocol::ObjectId;
use regex::{Regex, RegexBuilder};

/// A read filter over one collection.
///
/// The tenant clause is not optional: a filter can only be built through
/// [`Filter::scoped`], so every query carries its company id by
/// construction.
#[derive(Debug, Clone)]
pub struct Filter {
    company: ObjectId,
    clauses: Vec<Clause>,
}

#[derive(Debug, Clone)]
enum Clause {
    /// Exact string equality on a top-level field.
    Eq {
        field: &'static str,
        value: String,
    },
    /// Case-insensitive substring match unioned over several fields.
    FieldsMatch {
        fields: &'static [&'static str],
        pattern: Regex,
    },
    /// Date field within the calendar year, bounds inclusive:
    /// Jan 1 00:00:00 through Dec 31 00:00:00.
    YearRange {
        field: &'static str,
        year: i32,
    },
}

impl Filter {
    #[must_use]
    pub fn scoped(company: ObjectId) -> Self {
        Self {
            company,
            clauses: Vec::new(),
        }
    }

    #[must_use]
    pub fn eq(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.clauses.push(Clause::Eq {
            field,
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn eq_id(self, field: &'static str, id: ObjectId) -> Self {
        self.eq(field, id.to_string())
    }

    /// The employee-name union: matches when any of `fields` contains
    /// `needle`, ignoring case. The needle is taken literally.
    #[must_use]
    pub fn fields_match(mut self, fields: &'static [&'static str], needle: &str) -> Self {
        let pattern = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .expect("escaped pattern always compiles");
        self.clauses.push(Clause::FieldsMatch { fields, pattern });
        self
    }

    #[must_use]
    pub fn year(mut self, field: &'static str, year: i32) -> Self {
        self.clauses.push(Clause::YearRange { field, year });
        self
    }

    #[must_use]
    pub const fn company(&self) -> ObjectId {
        self.company
    }

    /// Evaluates the filter against one document. The tenant clause is
    /// checked first; a document without a parseable `companyId` never
    /// matches.
    #[must_use]
    pub fn matches(&self, doc: &Document) -> bool {
        let scoped = doc
            .str_field("companyId")
            .and_then(|raw| ObjectId::parse(raw).ok())
            .is_some_and(|company| company == self.company);
        if !scoped {
            return false;
        }
        self.clauses.iter().all(|clause| clause.matches(doc))
    }
}

impl Clause {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Self::Eq { field, value } => doc.str_field(field) == Some(value.as_str()),
            Self::FieldsMatch { fields, pattern } => fields
                .iter()
                .filter_map(|field| doc.str_field(field))
                .any(|text| pattern.is_match(text)),
            Self::YearRange { field, year } => doc
                .str_field(field)
                .and_then(parse_datetime)
                .zip(year_bounds(*year))
                .is_some_and(|(date, (start, end))| date >= start && date <= end),
        }
    }
}

/// Accepts the date shapes the store emits: RFC 3339, a naive
/// `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD`.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

fn year_bounds(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?
        .and_hms_opt(0, 0, 0)?
        .and_utc();
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?
        .and_hms_opt(0, 0, 0)?
        .and_utc();
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn company_a() -> ObjectId {
        ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
    }

    fn company_b() -> ObjectId {
        ObjectId::parse("bbbbbbbbbbbbbbbbbbbbbbbb").unwrap()
    }

    fn doc(value: Value) -> Document {
        Document::new(value)
    }

    #[test]
    fn tenant_scope_is_always_enforced() {
        let filter = Filter::scoped(company_a()).eq("name", "מכירות");
        let theirs = doc(json!({
            "companyId": company_b().to_string(),
            "name": "מכירות",
        }));
        assert!(!filter.matches(&theirs));

        let unowned = doc(json!({"name": "מכירות"}));
        assert!(!filter.matches(&unowned));
    }

    #[test]
    fn eq_matches_exact_strings_only() {
        let filter = Filter::scoped(company_a()).eq("name", "מכירות");
        let exact = doc(json!({"companyId": company_a().to_string(), "name": "מכירות"}));
        let prefix = doc(json!({"companyId": company_a().to_string(), "name": "מכירות וייצוא"}));
        assert!(filter.matches(&exact));
        assert!(!filter.matches(&prefix));
    }

    #[test]
    fn fields_match_is_case_insensitive_substring_over_union() {
        let filter =
            Filter::scoped(company_a()).fields_match(&["name", "lastName"], "כהן");
        let by_last_name = doc(json!({
            "companyId": company_a().to_string(),
            "name": "דוד",
            "lastName": "כהן לוי",
        }));
        let by_first_name = doc(json!({
            "companyId": company_a().to_string(),
            "name": "כהן",
            "lastName": "אברמוב",
        }));
        let neither = doc(json!({
            "companyId": company_a().to_string(),
            "name": "רות",
            "lastName": "לוי",
        }));
        assert!(filter.matches(&by_last_name));
        assert!(filter.matches(&by_first_name));
        assert!(!filter.matches(&neither));

        let latin = Filter::scoped(company_a()).fields_match(&["name", "lastName"], "cohen");
        let mixed_case = doc(json!({
            "companyId": company_a().to_string(),
            "name": "David",
            "lastName": "COHEN",
        }));
        assert!(latin.matches(&mixed_case));
    }

    #[test]
    fn year_range_keeps_the_inclusive_dec_31_midnight_bound() {
        let filter = Filter::scoped(company_a()).year("startDate", 2023);
        let in_year = doc(json!({
            "companyId": company_a().to_string(),
            "startDate": "2023-06-15T00:00:00Z",
        }));
        let new_years_eve_midnight = doc(json!({
            "companyId": company_a().to_string(),
            "startDate": "2023-12-31T00:00:00Z",
        }));
        // Later the same day falls outside the upper bound.
        let new_years_eve_noon = doc(json!({
            "companyId": company_a().to_string(),
            "startDate": "2023-12-31T12:00:00Z",
        }));
        let other_year = doc(json!({
            "companyId": company_a().to_string(),
            "startDate": "2024-01-01T00:00:00Z",
        }));
        assert!(filter.matches(&in_year));
        assert!(filter.matches(&new_years_eve_midnight));
        assert!(!filter.matches(&new_years_eve_noon));
        assert!(!filter.matches(&other_year));
    }

    #[test]
    fn year_range_accepts_bare_dates() {
        let filter = Filter::scoped(company_a()).year("transactionDate", 2023);
        let bare = doc(json!({
            "companyId": company_a().to_string(),
            "transactionDate": "2023-03-01",
        }));
        assert!(filter.matches(&bare));
    }
}
