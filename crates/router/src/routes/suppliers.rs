use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Supplier;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let supplier_name = q.value_after("ספק");

    let mut filter = ctx.filter();
    if let Some(name) = &supplier_name {
        filter = filter.eq("SupplierName", name.as_str());
    }

    let Some(doc) = ctx.store().find_one(Collection::Suppliers, &filter).await? else {
        let subject = supplier_name.as_deref().unwrap_or("ספק");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את הספק {subject}."
        )));
    };
    let supplier: Supplier = doc.decode(Collection::Suppliers)?;
    let name = format::known(&supplier.supplier_name).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("איש קשר") {
        format!(
            "איש הקשר של הספק {name} הוא {}.",
            format::available(&supplier.contact)
        )
    } else if q.contains("טלפון") {
        format!(
            "מספר הטלפון של הספק {name} הוא {}.",
            format::available(&supplier.phone)
        )
    } else if q.contains("מייל") {
        format!(
            "כתובת המייל של הספק {name} היא {}.",
            format::available(&supplier.email)
        )
    } else if q.contains("כתובת") {
        format!(
            "כתובת הספק {name} היא {}.",
            format::available(&supplier.address)
        )
    } else if q.contains("חשבון בנק") {
        format!(
            "חשבון הבנק של הספק {name} הוא {}.",
            format::available(&supplier.bank_account)
        )
    } else if q.contains("דירוג") {
        format!(
            "דירוגים של הספק {name}:\n{}",
            format::bullets(&supplier.ratings, "אין דירוגים")
        )
    } else if q.contains("מטבע") {
        format!(
            "מטבע הבסיס של הספק {name} הוא {}.",
            format::available(&supplier.base_currency)
        )
    } else if q.contains("פעיל") {
        format!(
            "הספק {name} פעיל: {}.",
            supplier.is_active.unwrap_or(true)
        )
    } else if q.contains("חשבון אישור") {
        format!(
            "חשבון האישור של הספק {name} הוא {}.",
            format::available(&supplier.confirmation_account)
        )
    } else if q.contains("קבצים") {
        format!(
            "קבצים של הספק {name}:\n{}",
            format::attachments(&supplier.attachments)
        )
    } else if q.contains("מוצרים") {
        format!(
            "מוצרים שמספק הספק {name}:\n{}",
            format::supplied_products(&resolver, &supplier.products_supplied).await?
        )
    } else {
        format!("מצאתי את המידע הבא על הספק {name}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
