use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::ProcurementProposal;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let proposal_title = q.value_after("הצעת רכש");

    let mut filter = ctx.filter();
    if let Some(title) = &proposal_title {
        filter = filter.eq("title", title.as_str());
    }

    let Some(doc) = ctx
        .store()
        .find_one(Collection::ProcurementProposals, &filter)
        .await?
    else {
        let subject = proposal_title.as_deref().unwrap_or("הצעה");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את הצעת הרכש {subject}."
        )));
    };
    let proposal: ProcurementProposal = doc.decode(Collection::ProcurementProposals)?;
    let title = format::known(&proposal.title).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("תיאור") {
        format!(
            "תיאור הצעת הרכש {title} הוא {}.",
            format::available(&proposal.description)
        )
    } else if q.contains("פריטים") {
        format!(
            "פריטים בהצעת הרכש {title}:\n{}",
            format::product_lines(&resolver, &proposal.items).await?
        )
    } else if q.contains("עלות משוערת") {
        format!(
            "עלות משוערת של הצעת הרכש {title} היא {} ש\"ח.",
            format::num(&proposal.total_estimated_cost)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס הצעת הרכש {title} הוא {}.",
            format::known(&proposal.status)
        )
    } else if q.contains("מי יצר") {
        format!(
            "הצעת הרכש {title} נוצרה על ידי {}.",
            resolver.employee(proposal.created_by.as_deref()).await?
        )
    } else if q.contains("תאריך בקשה") {
        format!(
            "תאריך הבקשה של הצעת הרכש {title} הוא {}.",
            format::available(&proposal.requested_date)
        )
    } else if q.contains("תאריך משלוח צפוי") {
        format!(
            "תאריך המשלוח הצפוי של הצעת הרכש {title} הוא {}.",
            format::available(&proposal.expected_delivery_date)
        )
    } else if q.contains("הערות") {
        format!(
            "הערות של הצעת הרכש {title}:\n{}",
            format::notes(&proposal.notes)
        )
    } else if q.contains("קבצים") {
        format!(
            "קבצים של הצעת הרכש {title}:\n{}",
            format::attachment_names(&proposal.attachments)
        )
    } else {
        format!(
            "מצאתי את המידע הבא על הצעת הרכש {title}:\n{}",
            doc.to_text()
        )
    };
    Ok(RouteOutcome::answered(reply))
}
