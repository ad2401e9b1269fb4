//! Credential resolution
//!
//! Merges an ordered chain of credential sources into one
//! [`ApiCredentials`](crate::credentials::ApiCredentials) value.

mod credential_resolver;

pub use credential_resolver::{CredentialResolver, ResolvedCredentials};
