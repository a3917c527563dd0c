//! One-shot messages handed from one navigation step to the next

use crate::types::Star;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashMessage {
    /// A star was just created inside `universe_id`
    StarCreated { universe_id: u64, star: Star },
}

/// Holds at most one pending message until the receiving page takes it.
#[derive(Debug, Default)]
pub struct FlashStore {
    pending: Option<FlashMessage>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message, replacing any that was never taken
    pub fn push(&mut self, message: FlashMessage) {
        if let Some(old) = self.pending.replace(message) {
            debug!(?old, "Dropping untaken flash message");
        }
    }

    /// Take the created star if it belongs to `scope`. Messages addressed to
    /// another universe (or to an unscoped page) stay pending.
    pub fn take_star_created(&mut self, scope: Option<u64>) -> Option<Star> {
        let addressed = matches!(
            &self.pending,
            Some(FlashMessage::StarCreated { universe_id, .. }) if Some(*universe_id) == scope
        );
        if !addressed {
            return None;
        }
        match self.pending.take() {
            Some(FlashMessage::StarCreated { star, .. }) => Some(star),
            None => None,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sirius() -> Star {
        Star {
            id: 5,
            name: "Sirius".into(),
            color: "BLUE".into(),
            universe: None,
        }
    }

    #[test]
    fn message_is_taken_once() {
        let mut flash = FlashStore::new();
        flash.push(FlashMessage::StarCreated {
            universe_id: 1,
            star: sirius(),
        });

        assert_eq!(flash.take_star_created(Some(1)), Some(sirius()));
        assert_eq!(flash.take_star_created(Some(1)), None);
        assert!(flash.is_empty());
    }

    #[test]
    fn other_scope_leaves_message_pending() {
        let mut flash = FlashStore::new();
        flash.push(FlashMessage::StarCreated {
            universe_id: 1,
            star: sirius(),
        });

        assert_eq!(flash.take_star_created(Some(2)), None);
        assert_eq!(flash.take_star_created(None), None);
        assert!(!flash.is_empty());
    }

    #[test]
    fn push_replaces_pending() {
        let mut flash = FlashStore::new();
        flash.push(FlashMessage::StarCreated {
            universe_id: 1,
            star: sirius(),
        });
        let mut vega = sirius();
        vega.id = 6;
        vega.name = "Vega".into();
        flash.push(FlashMessage::StarCreated {
            universe_id: 1,
            star: vega.clone(),
        });

        assert_eq!(flash.take_star_created(Some(1)), Some(vega));
    }
}
