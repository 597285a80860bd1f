//! Override store: persisted per-template edits.
//!
//! Keys are namespaced as `<namespace>.rule.<template id>`. The contract is
//! synchronous and infallible; backends that can fail internally log the
//! failure and carry on.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "craftedsignal";

/// Key→string store holding user-edited template content.
pub trait OverrideStore: Send {
    /// The stored value for `key`, if one was ever written.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// Storage key for a template's override.
pub fn storage_key(namespace: &str, template_id: &str) -> String {
    format!("{}.rule.{}", namespace, template_id)
}
