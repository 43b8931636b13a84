//! Mount status flags decoded from the `GU` reply

/// Point-in-time mount status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MountStatus {
    /// Sidereal tracking is active
    pub tracking: bool,
    /// A goto/slew is in progress
    pub slewing: bool,
}

/// Flag character present while not tracking
const NOT_TRACKING: char = 'n';

/// Flag character present while no slew is in progress
const NOT_SLEWING: char = 'N';

impl MountStatus {
    /// Decode a `GU` status reply
    ///
    /// The reply lists negative flags, so an absent flag means the
    /// condition holds.
    pub fn from_reply(text: &str) -> Self {
        Self {
            tracking: !text.contains(NOT_TRACKING),
            slewing: !text.contains(NOT_SLEWING),
        }
    }
}
