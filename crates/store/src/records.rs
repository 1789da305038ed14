//! Typed views of the business records.
//!
//! Every presentation field is optional: the store is schemaless and old
//! records routinely miss fields. Cross-references are kept as raw id
//! strings and resolved to display names at presentation time, so one
//! malformed reference never rejects a whole record.

use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub department_or_project_name: Option<String>,
    pub amount: Option<Number>,
    pub spent_amount: Option<Number>,
    pub currency: Option<String>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    #[serde(default)]
    pub approvals: Vec<Approval>,
    pub current_signatures: Option<Number>,
    pub current_signer_index: Option<Number>,
    #[serde(default)]
    pub signers: Vec<Signer>,
    pub department_id: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: Option<String>,
    pub allocated_amount: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub product_id: Option<String>,
    pub quantity: Option<Number>,
    pub unit_price: Option<Number>,
    pub total_price: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub approved_by: Option<String>,
    pub approved_at: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub order: Option<Number>,
    pub has_signed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub customer: Option<String>,
    pub order_total: Option<Number>,
    pub order_date: Option<String>,
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub global_discount: Option<Number>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: Option<String>,
    pub quantity: Option<Number>,
    pub unit_price: Option<Number>,
    pub discount: Option<Number>,
    pub total_price: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub status: Option<String>,
    pub customer_type: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub preferred_contact_method: Option<String>,
    pub last_contacted: Option<String>,
    pub customer_since: Option<String>,
    #[serde(default)]
    pub contacts: Vec<ContactPerson>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    pub name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: Option<String>,
    pub description: Option<String>,
    pub department_manager: Option<String>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
    #[serde(default)]
    pub budgets: Vec<BudgetRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRef {
    pub budget_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub identity: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectAssignment>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub performance_reviews: Vec<PerformanceReviewRef>,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    pub address: Option<EmployeeAddress>,
    pub status: Option<String>,
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub project_id: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReviewRef {
    pub review_id: Option<String>,
    pub score: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAddress {
    pub city: Option<String>,
    pub street: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub all_day: Option<bool>,
    pub location: Option<String>,
    pub meeting_url: Option<String>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub external_participants: Vec<ExternalParticipant>,
    pub recurrence: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExternalParticipant {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: Option<String>,
    pub file_url: Option<String>,
}

/// One ledger transaction. `transaction_type` is `"Income"` or `"Expense"`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRecord {
    pub transaction_type: Option<String>,
    pub transaction_amount: Option<Number>,
    pub transaction_currency: Option<String>,
    pub transaction_date: Option<String>,
    pub transaction_description: Option<String>,
    pub category: Option<String>,
    pub bank_account: Option<String>,
    pub transaction_status: Option<String>,
    pub record_type: Option<String>,
    pub party_id: Option<String>,
    #[serde(default, rename = "attachmentURL")]
    pub attachment_urls: Vec<String>,
    pub invoice_number: Option<String>,
    pub other_details: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub product_id: Option<String>,
    pub quantity: Option<Number>,
    pub min_stock_level: Option<Number>,
    pub reorder_quantity: Option<Number>,
    pub batch_number: Option<String>,
    pub expiration_date: Option<String>,
    pub shelf_location: Option<String>,
    pub last_order_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub plan_name: Option<String>,
    pub amount: Option<Number>,
    pub currency: Option<String>,
    pub payment_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub refunded: Option<bool>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementProposal {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<ProductLine>,
    pub total_estimated_cost: Option<Number>,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub requested_date: Option<String>,
    pub expected_delivery_date: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Shared line shape of procurement proposals and purchase orders.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<Number>,
    pub unit_price: Option<Number>,
    pub total: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Procurement {
    #[serde(rename = "PurchaseOrder")]
    pub purchase_order: Option<String>,
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductLine>,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: Option<String>,
    #[serde(rename = "PaymentTerms")]
    pub payment_terms: Option<String>,
    #[serde(rename = "DeliveryAddress")]
    pub delivery_address: Option<String>,
    #[serde(rename = "ShippingMethod")]
    pub shipping_method: Option<String>,
    pub purchase_date: Option<String>,
    pub delivery_date: Option<String>,
    pub order_status: Option<String>,
    pub approval_status: Option<String>,
    pub notes: Option<String>,
    pub payment_status: Option<String>,
    pub shipping_cost: Option<Number>,
    pub currency: Option<String>,
    pub requires_customs: Option<bool>,
    pub warranty_expiration: Option<String>,
    pub received_date: Option<String>,
    pub total_cost: Option<Number>,
    #[serde(rename = "summeryProcurement")]
    pub summary: Option<String>,
    pub current_signatures: Option<Number>,
    pub current_signer_index: Option<Number>,
    #[serde(default)]
    pub signers: Vec<Signer>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub product_description: Option<String>,
    pub unit_price: Option<Number>,
    pub category: Option<String>,
    pub supplier_id: Option<String>,
    pub length: Option<Number>,
    pub width: Option<Number>,
    pub height: Option<Number>,
    pub volume: Option<Number>,
    pub supplier_name: Option<String>,
    pub product_image: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub product_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub project_manager: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub department_id: Option<String>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    pub budget: Option<Number>,
    pub priority: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskRef>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<ProjectComment>,
    pub progress: Option<Number>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectComment {
    pub user: Option<String>,
    pub text: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Supplier {
    #[serde(rename = "SupplierName")]
    pub supplier_name: Option<String>,
    #[serde(rename = "Contact")]
    pub contact: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "BankAccount")]
    pub bank_account: Option<String>,
    #[serde(default, rename = "Rating")]
    pub ratings: Vec<String>,
    #[serde(rename = "baseCurrency")]
    pub base_currency: Option<String>,
    #[serde(rename = "IsActive")]
    pub is_active: Option<bool>,
    #[serde(rename = "ConfirmationAccount")]
    pub confirmation_account: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, rename = "ProductsSupplied")]
    pub products_supplied: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    #[serde(default)]
    pub assigned_to: Vec<String>,
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_items: Vec<TaskOrderItem>,
    pub department_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskOrderItem {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<Number>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_decode_as_none_and_empty() {
        let budget: Budget = serde_json::from_value(json!({
            "companyId": "aaaaaaaaaaaaaaaaaaaaaaaa",
            "departmentOrProjectName": "שיווק",
        }))
        .unwrap();
        assert_eq!(budget.department_or_project_name.as_deref(), Some("שיווק"));
        assert!(budget.amount.is_none());
        assert!(budget.signers.is_empty());
    }

    #[test]
    fn supplier_fields_keep_their_store_casing() {
        let supplier: Supplier = serde_json::from_value(json!({
            "SupplierName": "אלקטרה",
            "Phone": "03-5551234",
            "IsActive": true,
            "ProductsSupplied": ["65a1b2c3d4e5f60718293a4b"],
        }))
        .unwrap();
        assert_eq!(supplier.supplier_name.as_deref(), Some("אלקטרה"));
        assert_eq!(supplier.phone.as_deref(), Some("03-5551234"));
        assert_eq!(supplier.is_active, Some(true));
        assert_eq!(supplier.products_supplied.len(), 1);
    }

    #[test]
    fn finance_attachment_urls_rename() {
        let finance: FinanceRecord = serde_json::from_value(json!({
            "transactionType": "Income",
            "transactionAmount": 250,
            "attachmentURL": ["https://files.example/a.pdf"],
        }))
        .unwrap();
        assert_eq!(finance.transaction_amount.unwrap().as_f64(), Some(250.0));
        assert_eq!(finance.attachment_urls.len(), 1);
    }
}
