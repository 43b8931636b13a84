//! Bounded command queue between the UI and control contexts
//!
//! One producer (UI task), one consumer (control task). Sending never
//! waits longer than a caller-supplied deadline and a full queue drops the
//! new command, leaving queued ones untouched. Receiving never waits.

use core::future::Future;

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use mountpanel_protocol::CommandCode;

/// Queue depth used by the firmware
pub const COMMAND_QUEUE_DEPTH: usize = 10;

/// Consumer side of a command queue
pub trait CommandSource {
    /// Take the oldest queued command without waiting
    fn try_receive(&self) -> Option<CommandCode>;
}

/// Fixed-capacity FIFO of command codes
pub struct CommandChannel<M: RawMutex, const N: usize> {
    inner: Channel<M, CommandCode, N>,
}

impl<M: RawMutex, const N: usize> Default for CommandChannel<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> CommandChannel<M, N> {
    /// Create an empty channel
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Queue a command if there is room right now
    ///
    /// [`CommandCode::None`] is never queued and reports `false`.
    pub fn try_send(&self, code: CommandCode) -> bool {
        if code.is_none() {
            return false;
        }
        self.inner.try_send(code).is_ok()
    }

    /// Queue a command, waiting for room until `deadline` completes
    ///
    /// Returns `false` if the deadline fires first; the command is dropped.
    pub async fn send_within<D: Future>(&self, code: CommandCode, deadline: D) -> bool {
        if code.is_none() {
            return false;
        }
        if self.inner.try_send(code).is_ok() {
            return true;
        }
        match select(self.inner.send(code), deadline).await {
            Either::First(()) => true,
            Either::Second(_) => false,
        }
    }

    /// Take the oldest command without waiting
    pub fn try_receive(&self) -> Option<CommandCode> {
        self.inner.try_receive().ok()
    }
}

impl<M: RawMutex, const N: usize> CommandSource for CommandChannel<M, N> {
    fn try_receive(&self) -> Option<CommandCode> {
        CommandChannel::try_receive(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use mountpanel_protocol::Direction;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::vec::Vec;

    type TestChannel = CommandChannel<NoopRawMutex, COMMAND_QUEUE_DEPTH>;

    fn code(i: usize) -> CommandCode {
        let dir = Direction::ALL[i % 4];
        if i % 2 == 0 {
            CommandCode::Move(dir)
        } else {
            CommandCode::Halt(dir)
        }
    }

    fn drain(channel: &TestChannel) -> Vec<CommandCode> {
        core::iter::from_fn(|| channel.try_receive()).collect()
    }

    #[test]
    fn test_eleventh_send_is_rejected() {
        let channel = TestChannel::new();
        let sent: Vec<_> = (0..10).map(code).collect();

        for &c in &sent {
            assert!(channel.try_send(c));
        }
        assert!(channel.is_full());
        assert!(!channel.try_send(CommandCode::StopAll));
        assert_eq!(channel.len(), 10);

        assert_eq!(drain(&channel), sent);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_bounded_send_gives_up_when_full() {
        let channel = TestChannel::new();
        for i in 0..10 {
            assert!(channel.try_send(code(i)));
        }

        let accepted = block_on(channel.send_within(CommandCode::StopAll, core::future::ready(())));
        assert!(!accepted);
        assert_eq!(drain(&channel), (0..10).map(code).collect::<Vec<_>>());
    }

    #[test]
    fn test_bounded_send_with_room() {
        let channel = TestChannel::new();
        let accepted = block_on(channel.send_within(CommandCode::FocusIn, core::future::ready(())));
        assert!(accepted);
        assert_eq!(channel.try_receive(), Some(CommandCode::FocusIn));
    }

    #[test]
    fn test_none_is_never_queued() {
        let channel = TestChannel::new();
        assert!(!channel.try_send(CommandCode::None));
        assert!(!block_on(channel.send_within(CommandCode::None, core::future::pending::<()>())));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_receive_empty_is_not_an_error() {
        let channel = TestChannel::new();
        assert_eq!(channel.try_receive(), None);
        assert_eq!(CommandSource::try_receive(&channel), None);
    }

    #[test]
    fn test_bounded_send_accepted_when_room_frees() {
        let channel = TestChannel::new();
        for i in 0..10 {
            assert!(channel.try_send(code(i)));
        }

        // The deadline never fires, so acceptance must come from the freed slot
        let (accepted, taken) = block_on(join(
            channel.send_within(CommandCode::StopAll, core::future::pending::<()>()),
            async { channel.try_receive() },
        ));
        assert!(accepted);
        assert_eq!(taken, Some(code(0)));

        let mut expected: Vec<_> = (1..10).map(code).collect();
        expected.push(CommandCode::StopAll);
        assert_eq!(drain(&channel), expected);
    }

    proptest! {
        /// Matches a bounded VecDeque model for any interleaving
        #[test]
        fn prop_fifo_and_capacity(ops in proptest::collection::vec(proptest::option::of(0usize..8), 0..200)) {
            let channel = TestChannel::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Some(i) => {
                        let accepted = channel.try_send(code(i));
                        prop_assert_eq!(accepted, model.len() < COMMAND_QUEUE_DEPTH);
                        if accepted {
                            model.push_back(code(i));
                        }
                    }
                    None => prop_assert_eq!(channel.try_receive(), model.pop_front()),
                }
                prop_assert!(channel.len() <= channel.capacity());
                prop_assert_eq!(channel.len(), model.len());
            }
        }
    }
}
