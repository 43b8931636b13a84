//! Coordinate encoding and the position hand-off between contexts

pub mod codec;
pub mod readout;
pub mod snapshot;

pub use codec::{format_clock, EncodedAngle, READOUT_LEN, ROUNDING_BIAS};
pub use readout::ReadoutCache;
pub use snapshot::{PanelStatus, Position, PositionSnapshot, StatusSnapshot, STAMP_UNDEFINED};
