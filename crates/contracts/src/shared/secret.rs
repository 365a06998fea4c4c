/// Fixed stand-in shown for a secret value the client never learns.
pub const MASKED_PLACEHOLDER: &str = "********";

/// Tri-state for a secret form field.
///
/// A masked secret round-trips through an edit form as a placeholder string,
/// so a plain `String` cannot tell "the user left the mask alone" apart from
/// "the user typed a new key". Only `Provided` ever reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretField {
    /// No secret exists, or the user cleared the field.
    Unset,
    /// A secret exists server-side and the user did not touch it.
    Unchanged,
    /// Freshly entered by the user.
    Provided(String),
}

impl SecretField {
    /// Classify raw form input.
    pub fn from_input(input: &str) -> Self {
        if input == MASKED_PLACEHOLDER {
            SecretField::Unchanged
        } else if input.is_empty() {
            SecretField::Unset
        } else {
            SecretField::Provided(input.to_string())
        }
    }

    /// What an edit form should show initially.
    pub fn display_value(has_secret: bool) -> String {
        if has_secret {
            MASKED_PLACEHOLDER.to_string()
        } else {
            String::new()
        }
    }

    /// Wire value for a create/update payload.
    ///
    /// `Unchanged` and `Unset` are both omitted: the server keeps whatever
    /// it has stored. The placeholder itself is never sent.
    pub fn into_payload(self) -> Option<String> {
        match self {
            SecretField::Provided(value) => Some(value),
            SecretField::Unchanged | SecretField::Unset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_means_unchanged() {
        assert_eq!(SecretField::from_input("********"), SecretField::Unchanged);
    }

    #[test]
    fn test_empty_means_unset() {
        assert_eq!(SecretField::from_input(""), SecretField::Unset);
    }

    #[test]
    fn test_fresh_value_is_provided() {
        assert_eq!(
            SecretField::from_input("sk-abc123"),
            SecretField::Provided("sk-abc123".to_string())
        );
    }

    #[test]
    fn test_placeholder_never_reaches_the_wire() {
        assert_eq!(SecretField::from_input("********").into_payload(), None);
        assert_eq!(SecretField::Unset.into_payload(), None);
        assert_eq!(
            SecretField::from_input("sk-new").into_payload(),
            Some("sk-new".to_string())
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(SecretField::display_value(true), MASKED_PLACEHOLDER);
        assert_eq!(SecretField::display_value(false), "");
    }
}
