//! Cross-reference lookups: raw id strings to display names.
//!
//! Lookups are tenant-scoped through [`DocumentStore::find_by_id`], so an
//! id copied from another tenant resolves to the unknown sentinel instead
//! of leaking that tenant's data. Absence and malformed ids are never
//! errors here; store failures still propagate.

use crate::error::Result;
use nexora_protocol::ObjectId;
use nexora_store::records::{Customer, Department, Employee, Product, Project, Supplier};
use nexora_store::{Collection, Document, DocumentStore};

/// Display value for anything that cannot be resolved.
pub const UNKNOWN: &str = "לא ידוע";

pub struct NameResolver<'a> {
    store: &'a dyn DocumentStore,
    company: ObjectId,
}

impl<'a> NameResolver<'a> {
    #[must_use]
    pub fn new(store: &'a dyn DocumentStore, company: ObjectId) -> Self {
        Self { store, company }
    }

    async fn fetch(&self, collection: Collection, raw_id: Option<&str>) -> Result<Option<Document>> {
        let Some(raw) = raw_id else {
            return Ok(None);
        };
        let Ok(id) = ObjectId::parse(raw.trim()) else {
            return Ok(None);
        };
        Ok(self.store.find_by_id(self.company, collection, id).await?)
    }

    /// `"{name} {lastName}"`, trimmed.
    pub async fn employee(&self, raw_id: Option<&str>) -> Result<String> {
        let Some(doc) = self.fetch(Collection::Employees, raw_id).await? else {
            return Ok(UNKNOWN.to_string());
        };
        let employee: Employee = doc.decode(Collection::Employees)?;
        Ok(format!(
            "{} {}",
            employee.name.unwrap_or_default(),
            employee.last_name.unwrap_or_default()
        )
        .trim()
        .to_string())
    }

    pub async fn product(&self, raw_id: Option<&str>) -> Result<String> {
        let Some(doc) = self.fetch(Collection::Products, raw_id).await? else {
            return Ok(UNKNOWN.to_string());
        };
        let product: Product = doc.decode(Collection::Products)?;
        Ok(product.product_name.unwrap_or_else(|| UNKNOWN.to_string()))
    }

    pub async fn supplier(&self, raw_id: Option<&str>) -> Result<String> {
        let Some(doc) = self.fetch(Collection::Suppliers, raw_id).await? else {
            return Ok(UNKNOWN.to_string());
        };
        let supplier: Supplier = doc.decode(Collection::Suppliers)?;
        Ok(supplier.supplier_name.unwrap_or_else(|| UNKNOWN.to_string()))
    }

    pub async fn department(&self, raw_id: Option<&str>) -> Result<String> {
        let Some(doc) = self.fetch(Collection::Departments, raw_id).await? else {
            return Ok(UNKNOWN.to_string());
        };
        let department: Department = doc.decode(Collection::Departments)?;
        Ok(department.name.unwrap_or_else(|| UNKNOWN.to_string()))
    }

    pub async fn project(&self, raw_id: Option<&str>) -> Result<String> {
        let Some(doc) = self.fetch(Collection::Projects, raw_id).await? else {
            return Ok(UNKNOWN.to_string());
        };
        let project: Project = doc.decode(Collection::Projects)?;
        Ok(project.name.unwrap_or_else(|| UNKNOWN.to_string()))
    }

    /// Customer display name, used when rendering an order back to its
    /// owner. Not one of the five classic lookups but shaped the same way.
    pub async fn customer(&self, raw_id: Option<&str>) -> Result<String> {
        let Some(doc) = self.fetch(Collection::Customers, raw_id).await? else {
            return Ok(UNKNOWN.to_string());
        };
        let customer: Customer = doc.decode(Collection::Customers)?;
        Ok(customer.name.unwrap_or_else(|| UNKNOWN.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexora_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn company() -> ObjectId {
        ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
    }

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(
            Collection::Employees,
            json!({
                "_id": "111111111111111111111111",
                "companyId": company().to_string(),
                "name": "דוד",
                "lastName": "כהן",
            }),
        );
        store.insert(
            Collection::Products,
            json!({
                "_id": "222222222222222222222222",
                "companyId": company().to_string(),
                "productName": "מחשב נייד",
            }),
        );
        store
    }

    #[tokio::test]
    async fn employee_joins_first_and_last_name() {
        let store = store();
        let resolver = NameResolver::new(&store, company());
        let name = resolver
            .employee(Some("111111111111111111111111"))
            .await
            .unwrap();
        assert_eq!(name, "דוד כהן");
    }

    #[tokio::test]
    async fn invalid_empty_and_missing_ids_resolve_to_unknown() {
        let store = store();
        let resolver = NameResolver::new(&store, company());
        assert_eq!(resolver.employee(None).await.unwrap(), UNKNOWN);
        assert_eq!(resolver.employee(Some("")).await.unwrap(), UNKNOWN);
        assert_eq!(resolver.employee(Some("garbage")).await.unwrap(), UNKNOWN);
        assert_eq!(
            resolver
                .employee(Some("999999999999999999999999"))
                .await
                .unwrap(),
            UNKNOWN
        );
    }

    #[tokio::test]
    async fn lookups_do_not_cross_tenants() {
        let store = store();
        let other = ObjectId::parse("bbbbbbbbbbbbbbbbbbbbbbbb").unwrap();
        let resolver = NameResolver::new(&store, other);
        assert_eq!(
            resolver
                .product(Some("222222222222222222222222"))
                .await
                .unwrap(),
            UNKNOWN
        );
    }
}
