use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Customer;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let customer_name = q.value_after("לקוח");

    let mut filter = ctx.filter();
    if let Some(name) = &customer_name {
        filter = filter.eq("name", name.as_str());
    }

    let Some(doc) = ctx.store().find_one(Collection::Customers, &filter).await? else {
        let subject = customer_name.as_deref().unwrap_or("לקוח");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את הלקוח {subject}."
        )));
    };
    let customer: Customer = doc.decode(Collection::Customers)?;
    let name = format::known(&customer.name).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("מייל") {
        format!(
            "כתובת המייל של {name} היא {}.",
            format::available(&customer.email)
        )
    } else if q.contains("טלפון") {
        format!(
            "מספר הטלפון של {name} הוא {}.",
            format::available(&customer.phone)
        )
    } else if q.contains("כתובת") {
        format!(
            "כתובת הלקוח {name} היא {}.",
            format::available(&customer.address)
        )
    } else if q.contains("חברה") {
        format!(
            "שם החברה של {name} הוא {}.",
            format::available(&customer.company)
        )
    } else if q.contains("אתר") {
        format!(
            "אתר האינטרנט של {name} הוא {}.",
            format::available(&customer.website)
        )
    } else if q.contains("תעשייה") {
        format!(
            "תעשיית הלקוח {name} היא {}.",
            format::available(&customer.industry)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס הלקוח {name} הוא {}.",
            format::known(&customer.status)
        )
    } else if q.contains("סוג") {
        format!(
            "סוג הלקוח {name} הוא {}.",
            format::known(&customer.customer_type)
        )
    } else if q.contains("תאריך לידה") {
        format!(
            "תאריך הלידה של {name} הוא {}.",
            format::available(&customer.date_of_birth)
        )
    } else if q.contains("מין") {
        format!(
            "מין הלקוח {name} הוא {}.",
            format::known(&customer.gender)
        )
    } else if q.contains("שיטת קשר") {
        format!(
            "שיטת הקשר המועדפת של {name} היא {}.",
            format::available(&customer.preferred_contact_method)
        )
    } else if q.contains("תאריך קשר אחרון") {
        format!(
            "תאריך הקשר האחרון עם {name} הוא {}.",
            format::available(&customer.last_contacted)
        )
    } else if q.contains("לקוח מאז") {
        format!(
            "{name} הוא לקוח מאז {}.",
            format::available(&customer.customer_since)
        )
    } else if q.contains("אנשי קשר") {
        format!(
            "אנשי הקשר של {name}:\n{}",
            format::contacts(&customer.contacts)
        )
    } else if q.contains("הערות") {
        format!("הערות על {name}:\n{}", format::notes(&customer.notes))
    } else if q.contains("מי יצר") {
        format!(
            "הלקוח {name} נוצר על ידי {}.",
            resolver.employee(customer.created_by.as_deref()).await?
        )
    } else if q.contains("מי עודכן") {
        format!(
            "הלקוח {name} עודכן על ידי {}.",
            resolver.employee(customer.updated_by.as_deref()).await?
        )
    } else {
        format!(
            "מצאתי את המידע הבא על הלקוח {name}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
