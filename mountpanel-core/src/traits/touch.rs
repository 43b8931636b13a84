//! Touch input collaborator trait

use crate::ui::TouchSample;

/// Source of one touch reading per UI tick
pub trait TouchInput {
    type Error;

    /// Read the controller; [`TouchSample::Released`] when nothing touches the screen
    fn sample(&mut self) -> Result<TouchSample, Self::Error>;
}
