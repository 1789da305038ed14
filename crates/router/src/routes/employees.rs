use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::names::UNKNOWN;
use crate::question::Question;
use nexora_store::records::Employee;
use nexora_store::Collection;

/// The only handler with fuzzy matching: the extracted name is searched as
/// a case-insensitive substring of either the first or the last name.
pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let employee_name = q.value_after("עובד");

    let mut filter = ctx.filter();
    if let Some(name) = &employee_name {
        filter = filter.fields_match(&["name", "lastName"], name);
    }

    let Some(doc) = ctx.store().find_one(Collection::Employees, &filter).await? else {
        let subject = employee_name.as_deref().unwrap_or("עובד");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את העובד {subject}."
        )));
    };
    let employee: Employee = doc.decode(Collection::Employees)?;
    let full_name = format!(
        "{} {}",
        employee.name.as_deref().unwrap_or(UNKNOWN),
        employee.last_name.as_deref().unwrap_or(UNKNOWN)
    );
    let resolver = ctx.resolver();

    let reply = if q.contains("שם") {
        format!("שם העובד הוא {full_name}.")
    } else if q.contains("מין") {
        format!(
            "מין העובד {full_name} הוא {}.",
            format::known(&employee.gender)
        )
    } else if q.contains("תעודת זהות") {
        format!(
            "תעודת הזהות של {full_name} היא {}.",
            format::available(&employee.identity)
        )
    } else if q.contains("מייל") {
        format!(
            "כתובת המייל של {full_name} היא {}.",
            format::available(&employee.email)
        )
    } else if q.contains("תפקיד") {
        format!(
            "תפקידו של {full_name} הוא {}.",
            format::available(&employee.role)
        )
    } else if q.contains("טלפון") {
        format!(
            "מספר הטלפון של {full_name} הוא {}.",
            format::available(&employee.phone)
        )
    } else if q.contains("תמונת פרופיל") {
        format!(
            "תמונת הפרופיל של {full_name} היא {}.",
            format::available(&employee.profile_image)
        )
    } else if q.contains("מחלקה") {
        format!(
            "מחלקתו של {full_name} היא {}.",
            resolver.department(employee.department.as_deref()).await?
        )
    } else if q.contains("פרויקטים") {
        format!(
            "הפרויקטים של {full_name}:\n{}",
            format::assignments(&resolver, &employee.projects).await?
        )
    } else if q.contains("הטבות") {
        format!(
            "הטבות של {full_name}:\n{}",
            format::bullets(&employee.benefits, "אין הטבות")
        )
    } else if q.contains("ביקורות ביצועים") {
        format!(
            "ביקורות הביצועים של {full_name}:\n{}",
            format::reviews(&employee.performance_reviews)
        )
    } else if q.contains("נוכחות") {
        format!(
            "נוכחות של {full_name}:\n{}",
            format::attendance(&employee.attendance)
        )
    } else if q.contains("כתובת") {
        let address = employee.address.clone().unwrap_or_default();
        format!(
            "כתובת של {full_name}: {}, {}, {}",
            format::available(&address.city),
            format::available(&address.street),
            format::available(&address.country)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס של {full_name} הוא {}.",
            format::known(&employee.status)
        )
    } else if q.contains("התחברות אחרונה") {
        format!(
            "התחברות אחרונה של {full_name} היא {}.",
            format::available(&employee.last_login)
        )
    } else {
        format!("מצאתי את המידע הבא על {full_name}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
