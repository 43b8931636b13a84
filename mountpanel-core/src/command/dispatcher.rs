//! Maps queued command codes to mount controller calls
//!
//! Runs in the control context. Replies are not acted upon except for the
//! tracking query behind [`CommandCode::ToggleTracking`]; errors are handed
//! back for logging and the next command is processed regardless.

use mountpanel_protocol::{
    CommandCode, CommandError, FocusDirection, FocuserRate, MountCommand,
};

use super::channel::CommandSource;
use crate::traits::MountControl;

/// Control-context command executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandDispatcher {
    focuser_rate: FocuserRate,
}

impl CommandDispatcher {
    /// Create a dispatcher with the focuser at the slow rate
    pub fn new() -> Self {
        Self {
            focuser_rate: FocuserRate::SLOW,
        }
    }

    /// Rate selected before the next focuser move
    pub fn focuser_rate(&self) -> FocuserRate {
        self.focuser_rate
    }

    pub fn is_fast_focus(&self) -> bool {
        self.focuser_rate.is_fast()
    }

    /// Execute one command code
    pub async fn dispatch<M: MountControl>(
        &mut self,
        code: CommandCode,
        mount: &mut M,
    ) -> Result<(), CommandError> {
        match code {
            CommandCode::None => Ok(()),
            CommandCode::Move(direction) => send(mount, MountCommand::Move(direction)).await,
            CommandCode::Halt(direction) => send(mount, MountCommand::Halt(direction)).await,
            CommandCode::FocusIn => self.focus(mount, FocusDirection::In).await,
            CommandCode::FocusOut => self.focus(mount, FocusDirection::Out).await,
            CommandCode::FocusStop => send(mount, MountCommand::FocuserStop).await,
            CommandCode::StopAll => send(mount, MountCommand::StopAll).await,
            CommandCode::ToggleTracking => {
                let tracking = mount.is_tracking().await?;
                send(mount, MountCommand::SetTracking(!tracking)).await
            }
            CommandCode::ToggleFocusSpeed => {
                self.focuser_rate = self.focuser_rate.toggled();
                Ok(())
            }
        }
    }

    async fn focus<M: MountControl>(
        &mut self,
        mount: &mut M,
        direction: FocusDirection,
    ) -> Result<(), CommandError> {
        // The move goes out even if rate selection failed
        let rate = send(mount, MountCommand::FocuserRate(self.focuser_rate)).await;
        send(mount, MountCommand::FocuserMove(direction)).await?;
        rate
    }

    /// Execute every queued command, oldest first
    ///
    /// `on_error` sees each failed command. Returns how many were executed.
    pub async fn drain<S, M, F>(&mut self, source: &S, mount: &mut M, mut on_error: F) -> usize
    where
        S: CommandSource + ?Sized,
        M: MountControl,
        F: FnMut(CommandCode, CommandError),
    {
        let mut count = 0;
        while let Some(code) = source.try_receive() {
            if let Err(e) = self.dispatch(code, mount).await {
                on_error(code, e);
            }
            count += 1;
        }
        count
    }
}

async fn send<M: MountControl>(mount: &mut M, command: MountCommand) -> Result<(), CommandError> {
    match mount.command(command).await.error {
        None => Ok(()),
        Some(e) => Err(e),
    }
}
