use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Inventory;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let product_name = q.value_after("מוצר");

    let mut filter = ctx.filter();
    if let Some(name) = &product_name {
        let product = ctx
            .store()
            .find_one(
                Collection::Products,
                &ctx.filter().eq("productName", name.as_str()),
            )
            .await?;
        if let Some(id) = product.and_then(|doc| doc.id()) {
            filter = filter.eq_id("productId", id);
        }
    }

    let Some(doc) = ctx
        .store()
        .find_one(Collection::Inventories, &filter)
        .await?
    else {
        let subject = product_name.as_deref().unwrap_or("מוצר");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי מלאי עבור {subject}."
        )));
    };
    let inventory: Inventory = doc.decode(Collection::Inventories)?;
    let resolver = ctx.resolver();
    let product = resolver.product(inventory.product_id.as_deref()).await?;

    let reply = if q.contains("כמות") {
        format!(
            "כמות המלאי של {product} היא {} יחידות.",
            format::num(&inventory.quantity)
        )
    } else if q.contains("מינימום") {
        format!(
            "רמת המלאי המינימלית של {product} היא {} יחידות.",
            format::num(&inventory.min_stock_level)
        )
    } else if q.contains("כמות להזמנה") {
        format!(
            "כמות ההזמנה מחדש של {product} היא {} יחידות.",
            format::num(&inventory.reorder_quantity)
        )
    } else if q.contains("מספר אצווה") {
        format!(
            "מספר האצווה של {product} הוא {}.",
            format::available(&inventory.batch_number)
        )
    } else if q.contains("תאריך תפוגה") {
        format!(
            "תאריך התפוגה של {product} הוא {}.",
            format::available(&inventory.expiration_date)
        )
    } else if q.contains("מיקום מדף") {
        format!(
            "מיקום המדף של {product} הוא {}.",
            format::available(&inventory.shelf_location)
        )
    } else if q.contains("תאריך הזמנה אחרון") {
        format!(
            "תאריך ההזמנה האחרון של {product} הוא {}.",
            format::available(&inventory.last_order_date)
        )
    } else {
        format!(
            "מצאתי את המידע הבא על המלאי של {product}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
