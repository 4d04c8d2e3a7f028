//! Display order for the move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
///
/// Presentation only: toggling never touches history or the pointer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl std::fmt::Display for DisplayOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for order in <DisplayOrder as strum::IntoEnumIterator>::iter() {
            assert_ne!(order.toggle(), order);
            assert_eq!(order.toggle().toggle(), order);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&DisplayOrder::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
        let parsed: DisplayOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(parsed, DisplayOrder::Ascending);
    }
}
