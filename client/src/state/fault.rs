//! Process-wide fatal error latch behind the top-level error boundary.
//!
//! Once tripped the UI is replaced by a static error panel. There is no
//! reset: only a full page reload clears it.

#[cfg(test)]
#[path = "fault_test.rs"]
mod fault_test;

/// An unrecoverable rendering error or panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppFault {
    pub message: String,
    pub stack: Option<String>,
}

impl AppFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        let stack = stack.into();
        self.stack = if stack.trim().is_empty() { None } else { Some(stack) };
        self
    }

    /// Message followed by the stack trace, as shown in the panel.
    pub fn report(&self) -> String {
        match &self.stack {
            Some(stack) => format!("{}\n\n{stack}", self.message),
            None => self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FaultState {
    fault: Option<AppFault>,
}

impl FaultState {
    /// Record a fault. The first fault wins; returns whether this call
    /// tripped the latch.
    pub fn trip(&mut self, fault: AppFault) -> bool {
        if self.fault.is_some() {
            return false;
        }
        self.fault = Some(fault);
        true
    }

    pub fn is_tripped(&self) -> bool {
        self.fault.is_some()
    }

    pub fn fault(&self) -> Option<&AppFault> {
        self.fault.as_ref()
    }
}
