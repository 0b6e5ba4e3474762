//! Interactive confirmation prompts

use dialoguer::Confirm;

/// Asks the user before destructive snapshot operations
#[derive(Debug, Clone, Copy)]
pub struct Confirmer {
    yes_all: bool,
}

impl Confirmer {
    /// Create a confirmer; with `yes_all` every question is approved
    #[must_use]
    pub const fn new(yes_all: bool) -> Self {
        Self { yes_all }
    }

    /// Ask whether an existing snapshot may be replaced
    #[must_use]
    pub fn replace_snapshot(self, name: &str) -> bool {
        self.ask(&format!("Snapshot {name} already exists. Replace it?"))
    }

    /// Ask whether all listed snapshots may be removed
    #[must_use]
    pub fn remove_all(self, names: &[String]) -> bool {
        self.ask(&format!(
            "Remove {} snapshot(s): {}?",
            names.len(),
            names.join(", ")
        ))
    }

    /// A failed prompt, such as a closed terminal, counts as a decline
    fn ask(self, prompt: &str) -> bool {
        if self.yes_all {
            return true;
        }

        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}
