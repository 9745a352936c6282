pub mod provision;

pub use provision::{prepare, provision, TenantExists};
