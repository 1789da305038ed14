use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::CustomerOrder;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let customer_name = q.value_after("לקוח");

    let mut filter = ctx.filter();
    if let Some(name) = &customer_name {
        let customer = ctx
            .store()
            .find_one(
                Collection::Customers,
                &ctx.filter().eq("name", name.as_str()),
            )
            .await?;
        // An unknown customer name leaves the filter unconstrained; the
        // tenant's first order answers.
        if let Some(id) = customer.and_then(|doc| doc.id()) {
            filter = filter.eq_id("customer", id);
        }
    }

    let Some(doc) = ctx
        .store()
        .find_one(Collection::CustomerOrders, &filter)
        .await?
    else {
        let subject = customer_name.as_deref().unwrap_or("לקוח");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי הזמנות עבור {subject}."
        )));
    };
    let order: CustomerOrder = doc.decode(Collection::CustomerOrders)?;
    let resolver = ctx.resolver();
    let customer = resolver.customer(order.customer.as_deref()).await?;

    let reply = if q.contains("סכום") {
        format!(
            "סכום ההזמנה של {customer} הוא {} ש\"ח.",
            format::num(&order.order_total)
        )
    } else if q.contains("תאריך הזמנה") {
        format!(
            "תאריך ההזמנה של {customer} הוא {}.",
            format::available(&order.order_date)
        )
    } else if q.contains("תאריך משלוח") {
        format!(
            "תאריך המשלוח של ההזמנה של {customer} הוא {}.",
            format::available(&order.delivery_date)
        )
    } else if q.contains("פריטים") {
        format!(
            "פריטים בהזמנה של {customer}:\n{}",
            format::order_items(&resolver, &order.items).await?
        )
    } else if q.contains("הנחה") {
        format!(
            "הנחה גלובלית של ההזמנה של {customer} היא {}%.",
            format::num(&order.global_discount)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס ההזמנה של {customer} הוא {}.",
            format::known(&order.status)
        )
    } else if q.contains("הערות") {
        format!(
            "הערות ההזמנה של {customer}:\n{}",
            format::notes(&order.notes)
        )
    } else {
        format!(
            "מצאתי את המידע הבא על ההזמנה של {customer}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
