use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Event;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let title = q.value_after("אירוע");

    let mut filter = ctx.filter();
    if let Some(title) = &title {
        filter = filter.eq("title", title.as_str());
    }

    let Some(doc) = ctx.store().find_one(Collection::Events, &filter).await? else {
        let subject = title.as_deref().unwrap_or("אירוע");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את האירוע {subject}."
        )));
    };
    let event: Event = doc.decode(Collection::Events)?;
    let title = format::known(&event.title).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("תיאור") {
        format!(
            "תיאור האירוע {title} הוא {}.",
            format::available(&event.description)
        )
    } else if q.contains("תאריך התחלה") {
        format!(
            "תאריך ההתחלה של האירוע {title} הוא {}.",
            format::available(&event.start_date)
        )
    } else if q.contains("תאריך סיום") {
        format!(
            "תאריך הסיום של האירוע {title} הוא {}.",
            format::available(&event.end_date)
        )
    } else if q.contains("שעת התחלה") {
        format!(
            "שעת ההתחלה של האירוע {title} היא {}.",
            format::available(&event.start_time)
        )
    } else if q.contains("שעת סיום") {
        format!(
            "שעת הסיום של האירוע {title} היא {}.",
            format::available(&event.end_time)
        )
    } else if q.contains("כל היום") {
        format!(
            "האירוע {title} הוא כל היום: {}.",
            format::flag(&event.all_day)
        )
    } else if q.contains("מיקום") {
        format!(
            "מיקום האירוע {title} הוא {}.",
            format::available(&event.location)
        )
    } else if q.contains("קישור") {
        format!(
            "קישור הפגישה של האירוע {title} הוא {}.",
            format::available(&event.meeting_url)
        )
    } else if q.contains("סוג") {
        format!(
            "סוג האירוע {title} הוא {}.",
            format::known(&event.event_type)
        )
    } else if q.contains("משתתפים") {
        format!(
            "משתתפים באירוע {title}:\n{}",
            format::employee_refs(&resolver, "משתתף", &event.participants).await?
        )
    } else if q.contains("משתתפים חיצוניים") {
        format!(
            "משתתפים חיצוניים באירוע {title}:\n{}",
            format::external_participants(&event.external_participants)
        )
    } else if q.contains("חזרה") {
        format!(
            "חזרת האירוע {title} היא {}.",
            format::available(&event.recurrence)
        )
    } else if q.contains("קבצים") {
        format!(
            "קבצים של האירוע {title}:\n{}",
            format::attachments(&event.attachments)
        )
    } else if q.contains("מי יצר") {
        format!(
            "האירוע {title} נוצר על ידי {}.",
            resolver.employee(event.created_by.as_deref()).await?
        )
    } else if q.contains("הערות") {
        format!("הערות האירוע {title}:\n{}", format::notes(&event.notes))
    } else {
        format!("מצאתי את המידע הבא על האירוע {title}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
