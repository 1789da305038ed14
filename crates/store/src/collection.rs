use std::fmt::{self, Display};

/// The business collections this service reads.
///
/// `ALL` preserves the bulk-load order used when building a tenant's
/// similarity corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Budgets,
    CustomerOrders,
    Customers,
    Departments,
    Employees,
    Events,
    Finances,
    Inventories,
    Payments,
    PerformanceReviews,
    Procurements,
    ProcurementProposals,
    Products,
    ProductTrees,
    Projects,
    Suppliers,
    Tasks,
}

impl Collection {
    pub const ALL: [Self; 17] = [
        Self::Budgets,
        Self::CustomerOrders,
        Self::Customers,
        Self::Departments,
        Self::Employees,
        Self::Events,
        Self::Finances,
        Self::Inventories,
        Self::Payments,
        Self::PerformanceReviews,
        Self::Procurements,
        Self::ProcurementProposals,
        Self::Products,
        Self::ProductTrees,
        Self::Projects,
        Self::Suppliers,
        Self::Tasks,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Budgets => "budgets",
            Self::CustomerOrders => "customerorders",
            Self::Customers => "customers",
            Self::Departments => "departments",
            Self::Employees => "employees",
            Self::Events => "events",
            Self::Finances => "finances",
            Self::Inventories => "inventories",
            Self::Payments => "payments",
            Self::PerformanceReviews => "performancereviews",
            Self::Procurements => "procurements",
            Self::ProcurementProposals => "procurementproposals",
            Self::Products => "products",
            Self::ProductTrees => "producttrees",
            Self::Projects => "projects",
            Self::Suppliers => "suppliers",
            Self::Tasks => "tasks",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;

    #[test]
    fn names_roundtrip() {
        for collection in Collection::ALL {
            assert_eq!(Collection::from_name(collection.name()), Some(collection));
        }
        assert_eq!(Collection::from_name("no_such_collection"), None);
    }
}
