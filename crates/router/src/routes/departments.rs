use super::{RouteContext, RouteOutcome};
use crate::error::Result;
use crate::format;
use crate::question::Question;
use nexora_store::records::Department;
use nexora_store::Collection;

pub(super) async fn handle(ctx: &RouteContext<'_>, q: &Question) -> Result<RouteOutcome> {
    let dept_name = q
        .value_after("מחלקת")
        .or_else(|| q.value_after("מחלקה"));

    let mut filter = ctx.filter();
    if let Some(name) = &dept_name {
        filter = filter.eq("name", name.as_str());
    }

    let Some(doc) = ctx
        .store()
        .find_one(Collection::Departments, &filter)
        .await?
    else {
        let subject = dept_name.as_deref().unwrap_or("מחלקה");
        return Ok(RouteOutcome::not_found(format!(
            "לא מצאתי את מחלקת {subject}."
        )));
    };
    let department: Department = doc.decode(Collection::Departments)?;
    let name = format::known(&department.name).to_string();
    let resolver = ctx.resolver();

    let reply = if q.contains("תיאור") {
        format!(
            "תיאור מחלקת {name} הוא {}.",
            department
                .description
                .as_deref()
                .unwrap_or("אין תיאור זמין")
        )
    } else if q.contains("מנהל") {
        format!(
            "המנהל של מחלקת {name} הוא {}.",
            resolver
                .employee(department.department_manager.as_deref())
                .await?
        )
    } else if q.contains("עובדים") {
        format!(
            "העובדים במחלקת {name}:\n{}",
            format::team_members(&resolver, &department.team_members).await?
        )
    } else if q.contains("פרויקטים") {
        format!(
            "הפרויקטים של מחלקת {name}:\n{}",
            format::project_refs(&resolver, &department.projects).await?
        )
    } else if q.contains("תקציבים") {
        format!(
            "התקציבים של מחלקת {name}:\n{}",
            format::budget_refs(&department.budgets)
        )
    } else {
        format!("מצאתי את המידע הבא על מחלקת {name}:\n{}", doc.to_text())
    };
    Ok(RouteOutcome::answered(reply))
}
