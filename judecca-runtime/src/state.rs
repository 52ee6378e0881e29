//! Machine state for Judecca

/// Control state of a running machine
///
/// The tape, page cache and jump table live beside it in [`crate::Machine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MachineState {
    /// Instruction pointer
    pub ip: u64,

    /// Instructions executed
    pub steps: u64,

    /// BREAK instructions executed
    pub breakpoints: u64,
}

impl MachineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `next` and count the step
    #[inline]
    pub fn advance(&mut self, next: u64) {
        self.ip = next;
        self.steps += 1;
    }
}
