//! The domain router: a priority-ordered table of keyword predicates.
//!
//! The first matching entry owns the question; entries earlier in the table
//! shadow later ones, so the order is part of the contract and is pinned by
//! tests. Predicates are plain substring checks on the normalized question,
//! including the two explicit negative checks the cascade needs
//! (customer-but-not-order, supplier-but-not-purchase-order).

use crate::error::Result;
use crate::names::NameResolver;
use crate::question::Question;
use nexora_protocol::ObjectId;
use nexora_store::{DocumentStore, Filter};

mod budgets;
mod customers;
mod departments;
mod employees;
mod events;
mod finances;
mod inventories;
mod orders;
mod payments;
mod procurements;
mod products;
mod projects;
mod proposals;
mod suppliers;
mod tasks;

/// What a domain handler produced for a routed question.
///
/// Both variants carry a complete user-facing sentence; the split exists so
/// callers can log and test absence without parsing Hebrew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Answered(String),
    NotFound(String),
}

impl RouteOutcome {
    pub(crate) fn answered(text: impl Into<String>) -> Self {
        Self::Answered(text.into())
    }

    pub(crate) fn not_found(text: impl Into<String>) -> Self {
        Self::NotFound(text.into())
    }

    #[must_use]
    pub fn into_reply(self) -> String {
        match self {
            Self::Answered(text) | Self::NotFound(text) => text,
        }
    }
}

/// Everything a handler needs for one request: the store and the tenant.
pub struct RouteContext<'a> {
    store: &'a dyn DocumentStore,
    company: ObjectId,
}

impl<'a> RouteContext<'a> {
    #[must_use]
    pub fn new(store: &'a dyn DocumentStore, company: ObjectId) -> Self {
        Self { store, company }
    }

    pub(crate) fn store(&self) -> &'a dyn DocumentStore {
        self.store
    }

    pub(crate) fn filter(&self) -> Filter {
        Filter::scoped(self.company)
    }

    pub(crate) fn resolver(&self) -> NameResolver<'a> {
        NameResolver::new(self.store, self.company)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Budgets,
    Orders,
    Customers,
    Departments,
    Employees,
    Events,
    Finances,
    Inventories,
    Payments,
    ProcurementProposals,
    Procurements,
    Products,
    Projects,
    Suppliers,
    Tasks,
}

pub struct Route {
    pub domain: Domain,
    matches: fn(&Question) -> bool,
}

/// The cascade, in its canonical order.
pub const ROUTES: &[Route] = &[
    Route {
        domain: Domain::Budgets,
        matches: |q| q.contains("תקציב"),
    },
    Route {
        domain: Domain::Orders,
        matches: |q| q.contains("הזמנה") || q.contains("הזמנות"),
    },
    Route {
        domain: Domain::Customers,
        matches: |q| q.contains("לקוח") && !q.contains("הזמנה"),
    },
    Route {
        domain: Domain::Departments,
        matches: |q| q.contains("מחלקה"),
    },
    Route {
        domain: Domain::Employees,
        matches: |q| q.contains("עובד"),
    },
    Route {
        domain: Domain::Events,
        matches: |q| q.contains("אירוע"),
    },
    Route {
        domain: Domain::Finances,
        matches: |q| q.contains("הכנסות") || q.contains("הוצאות"),
    },
    Route {
        domain: Domain::Inventories,
        matches: |q| q.contains("מלאי"),
    },
    Route {
        domain: Domain::Payments,
        matches: |q| q.contains("תשלום") || q.contains("שילמנו"),
    },
    Route {
        domain: Domain::ProcurementProposals,
        matches: |q| q.contains("הצעת רכש"),
    },
    Route {
        domain: Domain::Procurements,
        matches: |q| q.contains("תעודת הרכש") || q.contains("po"),
    },
    Route {
        domain: Domain::Products,
        matches: |q| q.contains("מוצר"),
    },
    Route {
        domain: Domain::Projects,
        matches: |q| q.contains("פרויקט"),
    },
    Route {
        domain: Domain::Suppliers,
        matches: |q| q.contains("ספק") && !q.contains("תעודת הרכש"),
    },
    Route {
        domain: Domain::Tasks,
        matches: |q| q.contains("משימה") || q.contains("משימות"),
    },
];

/// Which domain would own this question, without touching the store.
#[must_use]
pub fn matched_domain(question: &Question) -> Option<Domain> {
    ROUTES
        .iter()
        .find(|route| (route.matches)(question))
        .map(|route| route.domain)
}

/// Routes the question to its domain handler. `Ok(None)` means no predicate
/// matched and the caller should fall through to similarity search.
pub async fn route(
    ctx: &RouteContext<'_>,
    question: &Question,
) -> Result<Option<RouteOutcome>> {
    let Some(domain) = matched_domain(question) else {
        return Ok(None);
    };
    log::debug!("Routing question to {domain:?}");
    let outcome = match domain {
        Domain::Budgets => budgets::handle(ctx, question).await?,
        Domain::Orders => orders::handle(ctx, question).await?,
        Domain::Customers => customers::handle(ctx, question).await?,
        Domain::Departments => departments::handle(ctx, question).await?,
        Domain::Employees => employees::handle(ctx, question).await?,
        Domain::Events => events::handle(ctx, question).await?,
        Domain::Finances => finances::handle(ctx, question).await?,
        Domain::Inventories => inventories::handle(ctx, question).await?,
        Domain::Payments => payments::handle(ctx, question).await?,
        Domain::ProcurementProposals => proposals::handle(ctx, question).await?,
        Domain::Procurements => procurements::handle(ctx, question).await?,
        Domain::Products => products::handle(ctx, question).await?,
        Domain::Projects => projects::handle(ctx, question).await?,
        Domain::Suppliers => suppliers::handle(ctx, question).await?,
        Domain::Tasks => tasks::handle(ctx, question).await?,
    };
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn domain_for(text: &str) -> Option<Domain> {
        matched_domain(&Question::new(text))
    }

    #[test]
    fn budget_questions_win_even_with_department_keywords() {
        assert_eq!(
            domain_for("מה התקציב של מחלקת שיווק?"),
            Some(Domain::Budgets)
        );
    }

    #[test]
    fn order_keyword_shadows_customer() {
        assert_eq!(
            domain_for("מה הסכום של הזמנה של לקוח דוד?"),
            Some(Domain::Orders)
        );
        assert_eq!(
            domain_for("מה המייל של לקוח דוד?"),
            Some(Domain::Customers)
        );
    }

    #[test]
    fn purchase_order_wins_over_supplier_via_negative_check() {
        assert_eq!(
            domain_for("מי הספק של תעודת הרכש po-17?"),
            Some(Domain::Procurements)
        );
        assert_eq!(
            domain_for("מה הטלפון של ספק אלקטרה?"),
            Some(Domain::Suppliers)
        );
    }

    #[test]
    fn bare_po_token_routes_to_procurements() {
        assert_eq!(domain_for("סטטוס po-1042"), Some(Domain::Procurements));
    }

    #[test]
    fn unmatched_questions_fall_through() {
        assert_eq!(domain_for("מה נשמע היום?"), None);
    }

    #[test]
    fn inventory_beats_product_by_order() {
        assert_eq!(
            domain_for("מה כמות המלאי של מוצר מחשב נייד?"),
            Some(Domain::Inventories)
        );
    }
}
