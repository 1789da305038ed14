use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Procurement;
use nexora_store::Collection;

/// Purchase orders are addressed by their `po-` numbered token rather than
/// by a name phrase.
pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let po_number = q.po_number();

    let mut filter = ctx.filter();
    if let Some(po) = &po_number {
        filter = filter.eq("PurchaseOrder", po.as_str());
    }

    let Some(doc) = ctx
        .store()
        .find_one(Collection::Procurements, &filter)
        .await?
    else {
        let subject = po_number.as_deref().unwrap_or("תעודה");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את תעודת הרכש {subject}."
        )));
    };
    let procurement: Procurement = doc.decode(Collection::Procurements)?;
    let po = format::known(&procurement.purchase_order).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("ספק") {
        format!(
            "הספק של תעודת הרכש {po} הוא {}.",
            format::known(&procurement.supplier_name)
        )
    } else if q.contains("מוצרים") {
        format!(
            "מוצרים בתעודת הרכש {po}:\n{}",
            format::product_lines(&resolver, &procurement.products).await?
        )
    } else if q.contains("שיטת תשלום") {
        format!(
            "שיטת התשלום של תעודת הרכש {po} היא {}.",
            format::available(&procurement.payment_method)
        )
    } else if q.contains("תנאי תשלום") {
        format!(
            "תנאי התשלום של תעודת הרכש {po} הם {}.",
            format::available(&procurement.payment_terms)
        )
    } else if q.contains("כתובת משלוח") {
        format!(
            "כתובת המשלוח של תעודת הרכש {po} היא {}.",
            format::available(&procurement.delivery_address)
        )
    } else if q.contains("שיטת משלוח") {
        format!(
            "שיטת המשלוח של תעודת הרכש {po} היא {}.",
            format::available(&procurement.shipping_method)
        )
    } else if q.contains("תאריך רכישה") {
        format!(
            "תאריך הרכישה של תעודת הרכש {po} הוא {}.",
            format::available(&procurement.purchase_date)
        )
    } else if q.contains("תאריך משלוח") {
        format!(
            "תאריך המשלוח של תעודת הרכש {po} הוא {}.",
            format::available(&procurement.delivery_date)
        )
    } else if q.contains("סטטוס הזמנה") {
        format!(
            "סטטוס ההזמנה של תעודת הרכש {po} הוא {}.",
            format::known(&procurement.order_status)
        )
    } else if q.contains("סטטוס אישור") {
        format!(
            "סטטוס האישור של תעודת הרכש {po} הוא {}.",
            format::known(&procurement.approval_status)
        )
    } else if q.contains("הערות") {
        format!(
            "הערות של תעודת הרכש {po}:\n{}",
            format::notes(&procurement.notes)
        )
    } else if q.contains("סטטוס תשלום") {
        format!(
            "סטטוס התשלום של תעודת הרכש {po} הוא {}.",
            format::known(&procurement.payment_status)
        )
    } else if q.contains("עלות משלוח") {
        format!(
            "עלות המשלוח של תעודת הרכש {po} היא {} {}.",
            format::num(&procurement.shipping_cost),
            format::currency(&procurement.currency)
        )
    } else if q.contains("מטבע") {
        format!(
            "מטבע התשלום של תעודת הרכש {po} הוא {}.",
            format::currency(&procurement.currency)
        )
    } else if q.contains("מכס") {
        format!(
            "האם נדרש מכס לתעודת הרכש {po}: {}.",
            format::flag(&procurement.requires_customs)
        )
    } else if q.contains("תאריך תפוגת אחריות") {
        format!(
            "תאריך תפוגת האחריות של תעודת הרכש {po} הוא {}.",
            format::available(&procurement.warranty_expiration)
        )
    } else if q.contains("תאריך קבלה") {
        format!(
            "תאריך הקבלה של תעודת הרכש {po} הוא {}.",
            format::available(&procurement.received_date)
        )
    } else if q.contains("עלות כוללת") {
        format!(
            "עלות כוללת של תעודת הרכש {po} היא {} {}.",
            format::num(&procurement.total_cost),
            format::currency(&procurement.currency)
        )
    } else if q.contains("סיכום") {
        format!(
            "סיכום תעודת הרכש {po}:\n{}",
            format::available(&procurement.summary)
        )
    } else if q.contains("חתימות נוכחיות") {
        format!(
            "מספר החתימות הנוכחיות של תעודת הרכש {po} הוא {}.",
            format::num(&procurement.current_signatures)
        )
    } else if q.contains("אינדקס חותם") {
        format!(
            "אינדקס החותם הנוכחי של תעודת הרכש {po} הוא {}.",
            format::num(&procurement.current_signer_index)
        )
    } else if q.contains("חותמים") {
        format!(
            "חותמים של תעודת הרכש {po}:\n{}",
            format::signers(&resolver, &procurement.signers).await?
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס כללי של תעודת הרכש {po} הוא {}.",
            format::known(&procurement.status)
        )
    } else {
        format!(
            "מצאתי את המידע הבא על תעודת הרכש {po}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
