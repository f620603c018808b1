//! Shared synchronization state

use crate::gate::UpdateGate;
use roottag_core::keys::NONE_TYPE;
use roottag_types::EnumerationDomain;
use std::sync::OnceLock;

fn sentinel_domain() -> &'static EnumerationDomain {
    static SENTINEL: OnceLock<EnumerationDomain> = OnceLock::new();
    SENTINEL.get_or_init(EnumerationDomain::sentinel_only)
}

/// Everything the engine knows between host callbacks.
///
/// Owned by the application and passed into every operation. The domain is
/// only ever replaced as a whole, and readers borrow it from here, so no
/// reference to a previous domain can outlive a rebuild.
#[derive(Debug)]
pub struct SyncContext {
    domain: Option<EnumerationDomain>,
    gate: UpdateGate,
    /// Value the type dropdown currently shows
    display: String,
    source_readable: bool,
}

impl Default for SyncContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncContext {
    /// Fresh state: no domain, gate closed, dropdown on "None"
    pub fn new() -> Self {
        Self {
            domain: None,
            gate: UpdateGate::closed(),
            display: NONE_TYPE.to_string(),
            source_readable: false,
        }
    }

    /// The installed domain, if a rebuild has ever happened
    pub fn domain(&self) -> Option<&EnumerationDomain> {
        self.domain.as_ref()
    }

    /// The installed domain, or one holding only "None" before the first rebuild
    pub fn current_domain(&self) -> &EnumerationDomain {
        self.domain.as_ref().unwrap_or_else(|| sentinel_domain())
    }

    pub fn has_domain(&self) -> bool {
        self.domain.is_some()
    }

    pub(crate) fn install_domain(&mut self, domain: EnumerationDomain) {
        self.domain = Some(domain);
    }

    pub(crate) fn clear_domain(&mut self) {
        self.domain = None;
        self.source_readable = false;
        self.display = NONE_TYPE.to_string();
    }

    pub fn gate(&self) -> UpdateGate {
        self.gate
    }

    pub fn set_gate(&mut self, open: bool) {
        self.gate.set(open);
    }

    /// Whether the last refresh could read the type list
    pub fn source_readable(&self) -> bool {
        self.source_readable
    }

    pub(crate) fn set_source_readable(&mut self, readable: bool) {
        self.source_readable = readable;
    }

    /// The dropdown's current value
    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub(crate) fn set_display(&mut self, value: &str) {
        if self.display != value {
            self.display = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let ctx = SyncContext::new();
        assert!(!ctx.has_domain());
        assert!(!ctx.gate().is_open());
        assert_eq!(ctx.display_value(), "None");
        assert_eq!(ctx.current_domain().identifiers(), vec!["None"]);
    }

    #[test]
    fn test_install_replaces_domain() {
        let mut ctx = SyncContext::new();
        ctx.install_domain(EnumerationDomain::from_names(&["Enemy"]));
        ctx.install_domain(EnumerationDomain::from_names(&["Door"]));

        assert_eq!(ctx.current_domain().identifiers(), vec!["None", "Door"]);
    }

    #[test]
    fn test_clear_domain() {
        let mut ctx = SyncContext::new();
        ctx.install_domain(EnumerationDomain::from_names(&["Enemy"]));
        ctx.set_display("Enemy");
        ctx.clear_domain();

        assert!(!ctx.has_domain());
        assert_eq!(ctx.display_value(), "None");
    }
}
