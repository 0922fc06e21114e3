//! Eligibility query framework.
//!
//! A [`QueryRegistry`] holds, per [`EligibilityMethod`] and store
//! [`Version`](crate::models::Version), an ordered list of
//! [`QueryDefinition`]s. The [`QueryDispatcher`] validates caller
//! parameters against each definition, runs the ones that qualify against a
//! [`MemberStore`] in order and stops at the first success.
//! [`EligibilityQueryExecutor`] layers the V1/V2 selection and the
//! active-organization filter on top.

pub mod definition;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod registry;
pub mod result;
pub mod store;

pub use definition::{is_date_param, QueryDefinition, QueryParams, ValidationResult};
pub use dispatch::{redact_params, QueryDispatcher};
pub use error::QueryError;
pub use executor::EligibilityQueryExecutor;
pub use registry::{EligibilityMethod, QueryRegistry};
pub use result::{EligibilityResult, MemberResult, QueryResult};
pub use store::{
    DateParam, FilteredParams, MemberQuery, MemberStore, Operation, OrganizationDirectory, ParamValue,
    StoreError, OPERATIONS,
};
