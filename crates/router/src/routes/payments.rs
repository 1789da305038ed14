use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Payment;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let plan_name = q.value_after("תוכנית");

    let mut filter = ctx.filter();
    if let Some(name) = &plan_name {
        filter = filter.eq("planName", name.as_str());
    }

    let Some(doc) = ctx.store().find_one(Collection::Payments, &filter).await? else {
        let subject = plan_name.as_deref().unwrap_or("תוכנית");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי תשלומים עבור תוכנית {subject}."
        )));
    };
    let payment: Payment = doc.decode(Collection::Payments)?;
    let plan = format::known(&payment.plan_name).to_string();

    let reply = if q.contains("סכום") {
        format!(
            "סכום התשלום עבור תוכנית {plan} הוא {} {}.",
            format::num(&payment.amount),
            format::currency(&payment.currency)
        )
    } else if q.contains("מטבע") {
        format!(
            "מטבע התשלום של תוכנית {plan} הוא {}.",
            format::currency(&payment.currency)
        )
    } else if q.contains("תאריך תשלום") {
        format!(
            "תאריך התשלום של תוכנית {plan} הוא {}.",
            format::available(&payment.payment_date)
        )
    } else if q.contains("תאריך התחלה") {
        format!(
            "תאריך ההתחלה של תוכנית {plan} הוא {}.",
            format::available(&payment.start_date)
        )
    } else if q.contains("תאריך סיום") {
        format!(
            "תאריך הסיום של תוכנית {plan} הוא {}.",
            format::available(&payment.end_date)
        )
    } else if q.contains("הוחזר") {
        format!(
            "התשלום עבור תוכנית {plan} הוחזר: {}.",
            format::flag(&payment.refunded)
        )
    } else if q.contains("מזהה סשן") {
        format!(
            "מזהה הסשן של התשלום עבור תוכנית {plan} הוא {}.",
            format::available(&payment.session_id)
        )
    } else {
        format!(
            "מצאתי את המידע הבא על התשלום עבור תוכנית {plan}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
