//! Vault index: scanning, link resolution and vault-wide checks

mod builder;
mod linkpath;
mod validate;
mod vault;

pub use builder::{
    BuildError, BuildResult, FileResult, IndexBuilder, NoopReporter, ProgressReporter,
};
pub use linkpath::{LinkResolver, strip_link_syntax};
pub use validate::validate_vault;
pub use vault::VaultIndex;
