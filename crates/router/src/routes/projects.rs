use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Project;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let project_name = q.value_after("פרויקט");

    let mut filter = ctx.filter();
    if let Some(name) = &project_name {
        filter = filter.eq("name", name.as_str());
    }

    let Some(doc) = ctx.store().find_one(Collection::Projects, &filter).await? else {
        let subject = project_name.as_deref().unwrap_or("פרויקט");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את הפרויקט {subject}."
        )));
    };
    let project: Project = doc.decode(Collection::Projects)?;
    let name = format::known(&project.name).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("מנהל") {
        format!(
            "מנהל הפרויקט {name} הוא {}.",
            resolver
                .employee(project.project_manager.as_deref())
                .await?
        )
    } else if q.contains("תיאור") {
        format!(
            "תיאור הפרויקט {name} הוא {}.",
            format::available(&project.description)
        )
    } else if q.contains("תאריך התחלה") {
        format!(
            "תאריך ההתחלה של הפרויקט {name} הוא {}.",
            format::available(&project.start_date)
        )
    } else if q.contains("תאריך סיום") {
        format!(
            "תאריך הסיום של הפרויקט {name} הוא {}.",
            format::available(&project.end_date)
        )
    } else if q.contains("סטטוס") {
        format!(
            "סטטוס הפרויקט {name} הוא {}.",
            format::known(&project.status)
        )
    } else if q.contains("מחלקה") {
        format!(
            "מחלקת הפרויקט {name} היא {}.",
            resolver
                .department(project.department_id.as_deref())
                .await?
        )
    } else if q.contains("חברי צוות") {
        format!(
            "חברי הצוות של הפרויקט {name}:\n{}",
            format::team_members(&resolver, &project.team_members).await?
        )
    } else if q.contains("תקציב") {
        format!(
            "תקציב הפרויקט {name} הוא {} ש\"ח.",
            format::num(&project.budget)
        )
    } else if q.contains("עדיפות") {
        format!(
            "עדיפות הפרויקט {name} היא {}.",
            format::available(&project.priority)
        )
    } else if q.contains("משימות") {
        format!(
            "משימות הפרויקט {name}:\n{}",
            format::task_refs(&project.tasks)
        )
    } else if q.contains("מסמכים") {
        format!(
            "מסמכים של הפרויקט {name}:\n{}",
            format::bullets(&project.documents, "אין מסמכים")
        )
    } else if q.contains("תגיות") {
        format!(
            "תגיות של הפרויקט {name}:\n{}",
            format::bullets(&project.tags, "אין תגיות")
        )
    } else if q.contains("הערות") {
        format!(
            "הערות של הפרויקט {name}:\n{}",
            format::comments(&project.comments)
        )
    } else if q.contains("התקדמות") {
        format!(
            "התקדמות הפרויקט {name} היא {}%.",
            format::num(&project.progress)
        )
    } else {
        format!("מצאתי את המידע הבא על הפרויקט {name}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
