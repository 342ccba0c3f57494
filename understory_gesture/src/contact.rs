// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact kinds.

use core::fmt;

/// Which kind of contact a gesture was made with.
///
/// Gesture fields that may have no contact at all are `Option<ContactKind>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// A single contact point: left button or one finger.
    Primary,
    /// Two contact points: right button, two fingers, or the platform's
    /// alternate trigger.
    Secondary,
}

impl ContactKind {
    /// Classifies a contact-down from the raw triggers of one tick.
    ///
    /// The alternate trigger, or the primary trigger while two or more
    /// contact points are present, is [`ContactKind::Secondary`]. The primary
    /// trigger alone is [`ContactKind::Primary`]. Returns `None` when neither
    /// trigger fired.
    #[must_use]
    pub fn classify(
        primary_down: bool,
        secondary_down: bool,
        contact_count: usize,
    ) -> Option<Self> {
        if secondary_down || (primary_down && contact_count >= 2) {
            Some(Self::Secondary)
        } else if primary_down {
            Some(Self::Primary)
        } else {
            None
        }
    }

    /// Returns `true` for [`ContactKind::Primary`].
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }

    /// Returns `true` for [`ContactKind::Secondary`].
    #[must_use]
    pub fn is_secondary(self) -> bool {
        self == Self::Secondary
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trigger_is_no_contact() {
        assert_eq!(ContactKind::classify(false, false, 0), None);
        // Contacts present without a trigger edge are not a new contact.
        assert_eq!(ContactKind::classify(false, false, 2), None);
    }

    #[test]
    fn primary_trigger_alone_is_primary() {
        assert_eq!(
            ContactKind::classify(true, false, 0),
            Some(ContactKind::Primary)
        );
        assert_eq!(
            ContactKind::classify(true, false, 1),
            Some(ContactKind::Primary)
        );
    }

    #[test]
    fn primary_trigger_with_two_points_is_secondary() {
        assert_eq!(
            ContactKind::classify(true, false, 2),
            Some(ContactKind::Secondary)
        );
    }

    #[test]
    fn alternate_trigger_wins_over_primary() {
        assert_eq!(
            ContactKind::classify(false, true, 0),
            Some(ContactKind::Secondary)
        );
        assert_eq!(
            ContactKind::classify(true, true, 1),
            Some(ContactKind::Secondary)
        );
    }
}
