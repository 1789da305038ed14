use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Budget;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let name = q
        .value_after("מחלקת")
        .or_else(|| q.value_after("פרויקט"));
    let year = q.year();

    let mut filter = ctx.filter();
    if let Some(name) = &name {
        filter = filter.eq("departmentOrProjectName", name.as_str());
    }
    if let Some(year) = year {
        filter = filter.year("startDate", year);
    }

    let Some(doc) = ctx.store().find_one(Collection::Budgets, &filter).await? else {
        let subject = name.as_deref().unwrap_or("התקציב");
        let year_part = year.map(|y| format!("לשנת {y}")).unwrap_or_default();
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי תקציב עבור {subject} {year_part}."
        )));
    };
    let budget: Budget = doc.decode(Collection::Budgets)?;
    let subject = name.unwrap_or_else(|| "התקציב".to_string());
    let resolver = ctx.resolver();

    let reply = if q.contains("סכום") || q.contains("כמה") {
        format!(
            "סכום התקציב של {subject} הוא {} {}.",
            format::num(&budget.amount),
            format::currency(&budget.currency)
        )
    } else if q.contains("סכום שהוצא") {
        format!(
            "הסכום שהוצא מתקציב {subject} הוא {} {}.",
            format::num(&budget.spent_amount),
            format::currency(&budget.currency)
        )
    } else if q.contains("מטבע") {
        format!(
            "המטבע של התקציב של {subject} הוא {}.",
            format::currency(&budget.currency)
        )
    } else if q.contains("תקופה") {
        format!(
            "תקופת התקציב של {subject} היא {}.",
            format::available(&budget.period)
        )
    } else if q.contains("תאריך התחלה") {
        format!(
            "תאריך ההתחלה של התקציב של {subject} הוא {}.",
            format::available(&budget.start_date)
        )
    } else if q.contains("תאריך סיום") {
        format!(
            "תאריך הסיום של התקציב של {subject} הוא {}.",
            format::available(&budget.end_date)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס התקציב של {subject} הוא {}.",
            format::known(&budget.status)
        )
    } else if q.contains("קטגוריות") {
        format!(
            "קטגוריות התקציב של {subject}:\n{}",
            format::categories(&budget.categories)
        )
    } else if q.contains("פריטים") {
        format!(
            "פריטים בתקציב של {subject}:\n{}",
            format::budget_items(&resolver, &budget.items).await?
        )
    } else if q.contains("הערות") {
        format!(
            "הערות התקציב של {subject}:\n{}",
            format::notes(&budget.notes)
        )
    } else if q.contains("מי יצר") {
        format!(
            "התקציב של {subject} נוצר על ידי {}.",
            resolver.employee(budget.created_by.as_deref()).await?
        )
    } else if q.contains("מי עודכן") {
        format!(
            "התקציב של {subject} עודכן על ידי {}.",
            resolver.employee(budget.updated_by.as_deref()).await?
        )
    } else if q.contains("אישורים") {
        format!(
            "אישורים לתקציב של {subject}:\n{}",
            format::approvals(&resolver, &budget.approvals).await?
        )
    } else if q.contains("חתימות נוכחיות") {
        format!(
            "מספר החתימות הנוכחיות של התקציב של {subject} הוא {}.",
            format::num(&budget.current_signatures)
        )
    } else if q.contains("אינדקס חותם") {
        format!(
            "אינדקס החותם הנוכחי של התקציב של {subject} הוא {}.",
            format::num(&budget.current_signer_index)
        )
    } else if q.contains("חותמים") {
        format!(
            "חותמים לתקציב של {subject}:\n{}",
            format::signers(&resolver, &budget.signers).await?
        )
    } else if q.contains("מחלקה") {
        format!(
            "מחלקת התקציב של {subject} היא {}.",
            resolver.department(budget.department_id.as_deref()).await?
        )
    } else if q.contains("פרויקט") {
        format!(
            "פרויקט התקציב של {subject} הוא {}.",
            resolver.project(budget.project_id.as_deref()).await?
        )
    } else {
        format!(
            "מצאתי את המידע הבא על התקציב של {subject}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
