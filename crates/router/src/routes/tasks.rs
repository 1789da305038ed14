use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Task;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let project_name = q.value_after("פרויקט");

    let mut filter = ctx.filter();
    if let Some(name) = &project_name {
        let project = ctx
            .store()
            .find_one(
                Collection::Projects,
                &ctx.filter().eq("name", name.as_str()),
            )
            .await?;
        if let Some(id) = project.and_then(|doc| doc.id()) {
            filter = filter.eq_id("projectId", id);
        }
    }

    let Some(doc) = ctx.store().find_one(Collection::Tasks, &filter).await? else {
        let subject = project_name.as_deref().unwrap_or("פרויקט");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי משימות עבור {subject}."
        )));
    };
    let task: Task = doc.decode(Collection::Tasks)?;
    let title = format::known(&task.title).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("תיאור") {
        format!(
            "תיאור המשימה {title} הוא {}.",
            format::available(&task.description)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס המשימה {title} הוא {}.",
            format::known(&task.status)
        )
    } else if q.contains("עדיפות") {
        format!(
            "עדיפות המשימה {title} היא {}.",
            format::available(&task.priority)
        )
    } else if q.contains("תאריך יעד") {
        format!(
            "תאריך היעד של המשימה {title} הוא {}.",
            format::available(&task.due_date)
        )
    } else if q.contains("מי שובץ") {
        format!(
            "מי ששובץ למשימה {title}:\n{}",
            format::employee_refs(&resolver, "עובד", &task.assigned_to).await?
        )
    } else if q.contains("מזהה הזמנה") {
        format!(
            "מזהה ההזמנה של המשימה {title} הוא {}.",
            format::available(&task.order_id)
        )
    } else if q.contains("פריטי הזמנה") {
        format!(
            "פריטי ההזמנה של המשימה {title}:\n{}",
            format::task_order_items(&resolver, &task.order_items).await?
        )
    } else if q.contains("מחלקה") {
        format!(
            "מחלקת המשימה {title} היא {}.",
            resolver.department(task.department_id.as_deref()).await?
        )
    } else {
        format!("מצאתי את המידע הבא על המשימה {title}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
