//! Presentation helpers: field defaults and multi-line list rendering.
//!
//! Scalar helpers carry the store's display defaults; list helpers render
//! one `"label: value"` line per sub-record, substituting resolved names
//! for cross-reference fields.

use crate::error::Result;
use crate::names::{NameResolver, UNKNOWN};
use nexora_store::records::{
    Approval, Attachment, AttendanceEntry, BudgetCategory, BudgetItem, BudgetRef, ContactPerson,
    ExternalParticipant, OrderItem, PerformanceReviewRef, ProductLine, ProjectAssignment,
    ProjectComment, ProjectRef, Signer, TaskOrderItem, TaskRef, TeamMember,
};
use serde_json::Number;

pub const NO_DATA: &str = "אין נתונים";

pub fn available(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("לא זמין")
}

pub fn known(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

pub fn num(value: &Option<Number>) -> String {
    value.as_ref().map_or_else(|| "0".to_string(), Number::to_string)
}

pub fn num_available(value: &Option<Number>) -> String {
    value
        .as_ref()
        .map_or_else(|| "לא זמין".to_string(), Number::to_string)
}

pub fn currency(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("ש\"ח")
}

pub fn notes(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("אין הערות")
}

pub fn flag(value: &Option<bool>) -> String {
    value.unwrap_or(false).to_string()
}

/// `- item` bullet lines, or `empty` when there are none.
pub fn bullets<S: AsRef<str>>(items: &[S], empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

// Inside list lines every missing field renders as the unknown sentinel.

fn list_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

fn list_num(value: &Option<Number>) -> String {
    value
        .as_ref()
        .map_or_else(|| UNKNOWN.to_string(), Number::to_string)
}

fn list_flag(value: &Option<bool>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |b| b.to_string())
}

fn line(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn finish(lines: Vec<String>) -> String {
    if lines.is_empty() {
        NO_DATA.to_string()
    } else {
        lines.join("\n")
    }
}

pub fn categories(categories: &[BudgetCategory]) -> String {
    finish(
        categories
            .iter()
            .map(|c| {
                line(&[
                    ("שם", list_text(&c.name).to_string()),
                    ("סכום", list_num(&c.allocated_amount)),
                ])
            })
            .collect(),
    )
}

pub async fn budget_items(resolver: &NameResolver<'_>, items: &[BudgetItem]) -> Result<String> {
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let product = resolver.product(item.product_id.as_deref()).await?;
        lines.push(line(&[
            ("מוצר", product),
            ("כמות", list_num(&item.quantity)),
            ("מחיר יחידה", list_num(&item.unit_price)),
            ("סה\"כ", list_num(&item.total_price)),
        ]));
    }
    Ok(finish(lines))
}

pub async fn approvals(resolver: &NameResolver<'_>, approvals: &[Approval]) -> Result<String> {
    let mut lines = Vec::with_capacity(approvals.len());
    for approval in approvals {
        let approver = resolver.employee(approval.approved_by.as_deref()).await?;
        lines.push(line(&[
            ("מאשר", approver),
            ("תאריך", list_text(&approval.approved_at).to_string()),
            ("הערה", list_text(&approval.comment).to_string()),
        ]));
    }
    Ok(finish(lines))
}

pub async fn signers(resolver: &NameResolver<'_>, signers: &[Signer]) -> Result<String> {
    let mut lines = Vec::with_capacity(signers.len());
    for signer in signers {
        let employee = resolver.employee(signer.employee_id.as_deref()).await?;
        lines.push(line(&[
            ("עובד", employee),
            ("שם", list_text(&signer.name).to_string()),
            ("תפקיד", list_text(&signer.role).to_string()),
            ("סדר", list_num(&signer.order)),
            ("חתם", list_flag(&signer.has_signed)),
        ]));
    }
    Ok(finish(lines))
}

pub async fn order_items(resolver: &NameResolver<'_>, items: &[OrderItem]) -> Result<String> {
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let product = resolver.product(item.product.as_deref()).await?;
        lines.push(line(&[
            ("מוצר", product),
            ("כמות", list_num(&item.quantity)),
            ("מחיר יחידה", list_num(&item.unit_price)),
            ("הנחה", list_num(&item.discount)),
            ("סה\"כ", list_num(&item.total_price)),
        ]));
    }
    Ok(finish(lines))
}

pub fn contacts(contacts: &[ContactPerson]) -> String {
    finish(
        contacts
            .iter()
            .map(|c| {
                line(&[
                    ("שם", list_text(&c.name).to_string()),
                    ("תפקיד", list_text(&c.position).to_string()),
                    ("מייל", list_text(&c.email).to_string()),
                    ("טלפון", list_text(&c.phone).to_string()),
                ])
            })
            .collect(),
    )
}

pub async fn team_members(resolver: &NameResolver<'_>, members: &[TeamMember]) -> Result<String> {
    let mut lines = Vec::with_capacity(members.len());
    for member in members {
        let employee = resolver.employee(member.employee_id.as_deref()).await?;
        lines.push(line(&[("עובד", employee)]));
    }
    Ok(finish(lines))
}

pub async fn project_refs(resolver: &NameResolver<'_>, refs: &[ProjectRef]) -> Result<String> {
    let mut lines = Vec::with_capacity(refs.len());
    for reference in refs {
        let project = resolver.project(reference.project_id.as_deref()).await?;
        lines.push(line(&[("פרויקט", project)]));
    }
    Ok(finish(lines))
}

pub fn budget_refs(refs: &[BudgetRef]) -> String {
    finish(
        refs.iter()
            .map(|r| line(&[("תקציב", list_text(&r.budget_id).to_string())]))
            .collect(),
    )
}

pub async fn assignments(
    resolver: &NameResolver<'_>,
    assignments: &[ProjectAssignment],
) -> Result<String> {
    let mut lines = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let project = resolver.project(assignment.project_id.as_deref()).await?;
        lines.push(line(&[
            ("פרויקט", project),
            ("תפקיד", list_text(&assignment.role).to_string()),
        ]));
    }
    Ok(finish(lines))
}

pub fn reviews(reviews: &[PerformanceReviewRef]) -> String {
    finish(
        reviews
            .iter()
            .map(|r| {
                line(&[
                    ("ביקורת", list_text(&r.review_id).to_string()),
                    ("ציון", list_num(&r.score)),
                ])
            })
            .collect(),
    )
}

pub fn attendance(entries: &[AttendanceEntry]) -> String {
    finish(
        entries
            .iter()
            .map(|e| {
                line(&[
                    ("תאריך", list_text(&e.date).to_string()),
                    ("סטטוס", list_text(&e.status).to_string()),
                ])
            })
            .collect(),
    )
}

/// Event participants and task assignees: bare employee-id lists.
pub async fn employee_refs(
    resolver: &NameResolver<'_>,
    label: &str,
    ids: &[String],
) -> Result<String> {
    let mut lines = Vec::with_capacity(ids.len());
    for id in ids {
        let employee = resolver.employee(Some(id)).await?;
        lines.push(line(&[(label, employee)]));
    }
    Ok(finish(lines))
}

pub fn external_participants(participants: &[ExternalParticipant]) -> String {
    finish(
        participants
            .iter()
            .map(|p| {
                line(&[
                    ("שם", list_text(&p.name).to_string()),
                    ("מייל", list_text(&p.email).to_string()),
                    ("טלפון", list_text(&p.phone).to_string()),
                ])
            })
            .collect(),
    )
}

pub fn attachments(attachments: &[Attachment]) -> String {
    finish(
        attachments
            .iter()
            .map(|a| {
                line(&[
                    ("שם קובץ", list_text(&a.file_name).to_string()),
                    ("קישור", list_text(&a.file_url).to_string()),
                ])
            })
            .collect(),
    )
}

pub fn attachment_names(attachments: &[Attachment]) -> String {
    finish(
        attachments
            .iter()
            .map(|a| line(&[("שם קובץ", list_text(&a.file_name).to_string())]))
            .collect(),
    )
}

pub async fn product_lines(resolver: &NameResolver<'_>, lines_in: &[ProductLine]) -> Result<String> {
    let mut lines = Vec::with_capacity(lines_in.len());
    for item in lines_in {
        let product = resolver.product(item.product_id.as_deref()).await?;
        lines.push(line(&[
            ("מוצר", product),
            ("שם", list_text(&item.product_name).to_string()),
            ("כמות", list_num(&item.quantity)),
            ("מחיר יחידה", list_num(&item.unit_price)),
            ("סה\"כ", list_num(&item.total)),
        ]));
    }
    Ok(finish(lines))
}

pub async fn task_order_items(
    resolver: &NameResolver<'_>,
    items: &[TaskOrderItem],
) -> Result<String> {
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let product = resolver.product(item.product_id.as_deref()).await?;
        lines.push(line(&[
            ("מוצר", product),
            ("שם", list_text(&item.product_name).to_string()),
            ("כמות", list_num(&item.quantity)),
        ]));
    }
    Ok(finish(lines))
}

pub fn comments(comments: &[ProjectComment]) -> String {
    finish(
        comments
            .iter()
            .map(|c| {
                line(&[
                    ("משתמש", list_text(&c.user).to_string()),
                    ("טקסט", list_text(&c.text).to_string()),
                    ("תאריך", list_text(&c.created_at).to_string()),
                ])
            })
            .collect(),
    )
}

pub fn task_refs(refs: &[TaskRef]) -> String {
    finish(
        refs.iter()
            .map(|r| line(&[("משימה", list_text(&r.task_id).to_string())]))
            .collect(),
    )
}

pub async fn supplied_products(resolver: &NameResolver<'_>, ids: &[String]) -> Result<String> {
    let mut lines = Vec::with_capacity(ids.len());
    for id in ids {
        let product = resolver.product(Some(id)).await?;
        lines.push(line(&[("מוצר", product)]));
    }
    Ok(finish(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_render_the_no_data_sentence() {
        assert_eq!(categories(&[]), NO_DATA);
        assert_eq!(contacts(&[]), NO_DATA);
    }

    #[test]
    fn lines_join_label_value_pairs() {
        let rendered = categories(&[
            BudgetCategory {
                name: Some("ציוד".to_string()),
                allocated_amount: Some(Number::from(1200)),
            },
            BudgetCategory {
                name: None,
                allocated_amount: None,
            },
        ]);
        assert_eq!(rendered, "שם: ציוד - סכום: 1200\nשם: לא ידוע - סכום: לא ידוע");
    }

    #[test]
    fn bullets_fall_back_to_the_empty_sentence() {
        assert_eq!(bullets::<&str>(&[], "אין מסמכים"), "אין מסמכים");
        assert_eq!(
            bullets(&["a.pdf".to_string(), "b.pdf".to_string()], "אין מסמכים"),
            "- a.pdf\n- b.pdf"
        );
    }
}
