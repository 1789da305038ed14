//! Keyword routing and answer extraction for the chat service.
//!
//! A question is normalized once ([`Question`]), matched against the
//! ordered predicate table ([`routes::ROUTES`]), and handled by the owning
//! domain module, which builds a tenant-scoped filter, fetches the first
//! matching record, and renders one field (or sub-list) of it into a
//! Hebrew sentence. Questions no predicate claims fall through to the
//! similarity fallback, which lives in its own crate.

pub mod error;
pub mod extract;
pub mod format;
pub mod names;
pub mod question;
pub mod routes;

pub use error::{Result, RouterError};
pub use names::{NameResolver, UNKNOWN};
pub use question::Question;
pub use routes::{matched_domain, route, Domain, Route, RouteContext, RouteOutcome, ROUTES};
