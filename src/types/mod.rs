mod errors;
mod monetary;

pub use errors::AmountError;
pub use monetary::{format_cents, string_to_cents};

pub type AccountId = u64;
pub type ExternalId = String;

/// Signed count of minor currency units.
pub type Cents = i64;
