use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Product;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let product_name = q.value_after("מוצר");

    let mut filter = ctx.filter();
    if let Some(name) = &product_name {
        filter = filter.eq("productName", name.as_str());
    }

    let Some(doc) = ctx.store().find_one(Collection::Products, &filter).await? else {
        let subject = product_name.as_deref().unwrap_or("מוצר");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את המוצר {subject}."
        )));
    };
    let product: Product = doc.decode(Collection::Products)?;
    let name = format::known(&product.product_name).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("מקט") {
        format!(
            "מק\"ט של המוצר {name} הוא {}.",
            format::available(&product.sku)
        )
    } else if q.contains("ברקוד") {
        format!(
            "ברקוד של המוצר {name} הוא {}.",
            format::available(&product.barcode)
        )
    } else if q.contains("תיאור") {
        format!(
            "תיאור המוצר {name} הוא {}.",
            format::available(&product.product_description)
        )
    } else if q.contains("מחיר") {
        format!(
            "מחיר המוצר {name} הוא {} ש\"ח.",
            format::num(&product.unit_price)
        )
    } else if q.contains("קטגוריה") {
        format!(
            "קטגוריית המוצר {name} היא {}.",
            format::available(&product.category)
        )
    } else if q.contains("ספק") {
        format!(
            "הספק של המוצר {name} הוא {}.",
            resolver.supplier(product.supplier_id.as_deref()).await?
        )
    } else if q.contains("אורך") {
        format!(
            "אורך המוצר {name} הוא {}.",
            format::num_available(&product.length)
        )
    } else if q.contains("רוחב") {
        format!(
            "רוחב המוצר {name} הוא {}.",
            format::num_available(&product.width)
        )
    } else if q.contains("גובה") {
        format!(
            "גובה המוצר {name} הוא {}.",
            format::num_available(&product.height)
        )
    } else if q.contains("נפח") {
        format!(
            "נפח המוצר {name} הוא {}.",
            format::num_available(&product.volume)
        )
    } else if q.contains("שם ספק") {
        format!(
            "שם הספק של המוצר {name} הוא {}.",
            format::available(&product.supplier_name)
        )
    } else if q.contains("תמונה") {
        format!(
            "תמונת המוצר {name} היא {}.",
            format::available(&product.product_image)
        )
    } else if q.contains("קבצים") {
        format!(
            "קבצים של המוצר {name}:\n{}",
            format::attachments(&product.attachments)
        )
    } else if q.contains("סוג") {
        format!(
            "סוג המוצר {name} הוא {}.",
            format::known(&product.product_type)
        )
    } else {
        format!("מצאתי את המידע הבא על המוצר {name}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
