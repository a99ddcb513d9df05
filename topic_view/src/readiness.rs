use tracing::debug;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TableKind {
    Meta,
    Messages,
}

impl TableKind {
    fn bit(self) -> u8 {
        match self {
            TableKind::Meta => 0b01,
            TableKind::Messages => 0b10,
        }
    }
}

const BOTH_READY: u8 = 0b11;

/// Completion set of the meta and message tables.
#[derive(Debug, Default, Clone)]
pub struct ReadinessGate {
    ready: u8,
    opened: bool,
}

impl ReadinessGate {
    /// Marks a table as loaded; returns `true` only on the call that opens the gate.
    pub fn signal(&mut self, table: TableKind) -> bool {
        self.ready |= table.bit();
        debug!("{table:?} table ready, completion set {:#04b}", self.ready);
        if self.opened || self.ready != BOTH_READY {
            return false;
        }
        self.opened = true;
        true
    }

    pub fn is_ready(&self, table: TableKind) -> bool {
        self.ready & table.bit() != 0
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }
}
