use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::names::UNKNOWN;
use crate::question::Question;
use nexora_store::records::FinanceRecord;
use nexora_store::Collection;

/// Income/expense questions. Unlike every other handler, amount questions
/// aggregate across all matching transactions instead of describing only
/// the first one.
pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let year = q.year();
    let (base, transaction_type) = if q.contains("הכנסות") {
        ("הכנסות", "Income")
    } else {
        ("הוצאות", "Expense")
    };

    let mut filter = ctx.filter().eq("transactionType", transaction_type);
    if let Some(year) = year {
        filter = filter.year("transactionDate", year);
    }

    let records = ctx.store().find(Collection::Finances, &filter).await?;
    let year_part = year.map(|y| format!("ב-{y}")).unwrap_or_default();
    let subject = format!("{base} {year_part}");

    let Some(first_doc) = records.first() else {
        return Ok(RouteOutcome::not_found(format!("לא מצאתי {subject}.")));
    };
    let first: FinanceRecord = first_doc.decode(Collection::Finances)?;
    let resolver = ctx.resolver();

    let reply = if q.contains("סכום") {
        let mut total = 0.0;
        for doc in &records {
            let record: FinanceRecord = doc.decode(Collection::Finances)?;
            total += record
                .transaction_amount
                .as_ref()
                .and_then(serde_json::Number::as_f64)
                .unwrap_or(0.0);
        }
        format!(
            "{subject} הכוללות הן {total} {}.",
            format::currency(&first.transaction_currency)
        )
    } else if q.contains("תאריך") {
        format!(
            "תאריך העסקה של {subject} הוא {}.",
            format::available(&first.transaction_date)
        )
    } else if q.contains("סוג") {
        format!(
            "סוג העסקה של {subject} הוא {}.",
            format::known(&first.transaction_type)
        )
    } else if q.contains("מטבע") {
        format!(
            "מטבע העסקה של {subject} הוא {}.",
            format::currency(&first.transaction_currency)
        )
    } else if q.contains("תיאור") {
        format!(
            "תיאור העסקה של {subject} הוא {}.",
            format::available(&first.transaction_description)
        )
    } else if q.contains("קטגוריה") {
        format!(
            "קטגוריית העסקה של {subject} היא {}.",
            format::available(&first.category)
        )
    } else if q.contains("חשבון בנק") {
        format!(
            "חשבון הבנק של העסקה של {subject} הוא {}.",
            format::available(&first.bank_account)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס העסקה של {subject} הוא {}.",
            format::known(&first.transaction_status)
        )
    } else if q.contains("סוג רשומה") {
        format!(
            "סוג הרשומה של העסקה של {subject} הוא {}.",
            format::known(&first.record_type)
        )
    } else if q.contains("צד העסקה") {
        let party = match first.record_type.as_deref() {
            Some("employee") => resolver.employee(first.party_id.as_deref()).await?,
            Some("supplier") => resolver.supplier(first.party_id.as_deref()).await?,
            _ => UNKNOWN.to_string(),
        };
        format!("צד העסקה של {subject} הוא {party}.")
    } else if q.contains("קבצים") {
        format!(
            "קבצים של העסקה של {subject}:\n{}",
            format::bullets(&first.attachment_urls, "אין קבצים")
        )
    } else if q.contains("מספר חשבונית") {
        format!(
            "מספר החשבונית של העסקה של {subject} הוא {}.",
            format::available(&first.invoice_number)
        )
    } else if q.contains("פרטים נוספים") {
        format!(
            "פרטים נוספים של העסקה של {subject}:\n{}",
            first.other_details.as_deref().unwrap_or("אין פרטים")
        )
    } else {
        format!(
            "מצאתי את המידע הבא על {subject}:\n{}",
            first_doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
