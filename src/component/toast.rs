//! src/component/toast.rs

/// Only the most recent notification is kept on screen.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Toast {
    pub fn submission_failed() -> Self {
        Self {
            title: "Submission Failed".into(),
            description: "Something went wrong. Please try again.".into(),
            variant: Variant::Destructive,
        }
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = match self.variant {
            Variant::Default => "i",
            Variant::Destructive => "!",
        };
        write!(f, "[{}] {}: {}", marker, self.title, self.description)
    }
}

/// Transient notifications raised by the component.
#[derive(Debug, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Removes every visible toast, handing them to the caller for display.
    pub fn dismiss_all(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}
