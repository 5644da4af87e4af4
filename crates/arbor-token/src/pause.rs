// crates/arbor-token/src/pause.rs
//
// Emergency stop. Checked by every balance-mutating operation except mint.

use serde::{Deserialize, Serialize};

use arbor_core::TokenError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the switch and return the new value. Authorization is the caller's job.
    pub fn set(&mut self, pause: bool) -> bool {
        self.paused = pause;
        pause
    }

    /// Fail with `ContractPaused` while the switch is on.
    pub fn ensure_unpaused(&self) -> Result<(), TokenError> {
        if self.paused {
            Err(TokenError::ContractPaused)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unpaused() {
        let gate = PauseGate::default();
        assert!(!gate.is_paused());
        assert!(gate.ensure_unpaused().is_ok());
    }

    #[test]
    fn test_pause_blocks() {
        let mut gate = PauseGate::default();
        assert!(gate.set(true));
        assert_eq!(gate.ensure_unpaused(), Err(TokenError::ContractPaused));
        assert!(!gate.set(false));
        assert!(gate.ensure_unpaused().is_ok());
    }
}
