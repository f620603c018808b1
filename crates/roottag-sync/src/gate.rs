//! The update gate

/// Process-wide switch guarding destructive tag cleanup.
///
/// Closed while the type enumeration is being rebuilt; consistency code
/// must then warn instead of deleting tags. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateGate {
    open: bool,
}

impl UpdateGate {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set(&mut self, open: bool) {
        self.open = open;
    }

    pub fn open(&mut self) {
        self.set(true);
    }

    pub fn close(&mut self) {
        self.set(false);
    }
}
