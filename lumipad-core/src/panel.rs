//! Panel coordinator
//!
//! Ties the button monitor, the line accumulator and the dispatcher into
//! the one object the firmware's polling task drives:
//!
//! ```text
//!  pins ──poll_buttons()──► ButtonMonitor ──callback──► Outbox ──► UART
//!  UART ──push_byte()────► LineBuffer ──parse_line()──► Dispatcher ──► strips, buzzer
//! ```
//!
//! Nothing here blocks or logs. Every completed line comes back as a
//! [`Handled`] report for the caller to log.

use heapless::{Deque, String};
use lumipad_hal::InputPin;
use lumipad_protocol::{
    parse_line, Command, LineBuffer, LineError, NotACommand, Notification, MAX_LINE_LEN,
};

use crate::buttons::ButtonMonitor;
use crate::config::{ConfigError, PanelConfig};
use crate::dispatch::{CommandId, DispatchError, Dispatcher};
use crate::traits::{Buzzer, LedStrip};

/// Notifications held between polls
pub const OUTBOX_LEN: usize = 16;

/// Pending button notifications
///
/// When full, the newest notification is dropped and counted.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: Deque<Notification, OUTBOX_LEN>,
    dropped: usize,
}

impl Outbox {
    pub fn push(&mut self, notification: Notification) {
        if self.queue.push_back(notification).is_err() {
            self.dropped += 1;
        }
    }

    pub fn pop(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Notifications lost to a full queue since startup
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Default button callback: queue `pressed <i>` / `released <i>`
pub fn notify(outbox: &mut Outbox, index: usize, pressed: bool) {
    outbox.push(Notification::from_transition(index, pressed));
}

/// Why a completed line had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejected {
    Line(LineError),
    NotACommand(NotACommand),
    Dispatch(DispatchError),
}

impl From<LineError> for Rejected {
    fn from(err: LineError) -> Self {
        Self::Line(err)
    }
}

impl From<NotACommand> for Rejected {
    fn from(err: NotACommand) -> Self {
        Self::NotACommand(err)
    }
}

impl From<DispatchError> for Rejected {
    fn from(err: DispatchError) -> Self {
        Self::Dispatch(err)
    }
}

/// Outcome of one completed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled {
    line: String<MAX_LINE_LEN>,
    result: Result<CommandId, Rejected>,
}

impl Handled {
    /// The raw line, without its newline; empty if it could not be read
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The parsed command, if the line was one
    pub fn command(&self) -> Option<Command<'_>> {
        parse_line(&self.line).ok()
    }

    pub fn result(&self) -> Result<CommandId, Rejected> {
        self.result
    }
}

/// The whole panel behind one polling interface
pub struct Panel<P, M, S, B, const N: usize> {
    buttons: ButtonMonitor<P, Outbox, N>,
    line: LineBuffer,
    dispatcher: Dispatcher<M, S, B>,
    outbox: Outbox,
}

impl<P, M, S, B, const N: usize> Panel<P, M, S, B, N>
where
    P: InputPin,
    M: LedStrip,
    S: LedStrip,
    B: Buzzer,
{
    /// Build the panel with every button reporting transitions
    pub fn new(
        config: PanelConfig,
        pins: [P; N],
        matrix: M,
        status: S,
        buzzer: Option<B>,
    ) -> Result<Self, ConfigError> {
        let dispatcher = Dispatcher::new(config, matrix, status, buzzer)?;
        let mut buttons: ButtonMonitor<P, Outbox, N> = ButtonMonitor::new(pins);
        buttons.set_all_callbacks(Some(notify));

        Ok(Self {
            buttons,
            line: LineBuffer::new(),
            dispatcher,
            outbox: Outbox::default(),
        })
    }

    /// Sample every button once, queueing a notification per transition
    pub fn poll_buttons(&mut self) {
        self.buttons.poll(&mut self.outbox);
    }

    /// Next notification to send, oldest first
    pub fn pop_notification(&mut self) -> Option<Notification> {
        self.outbox.pop()
    }

    /// Feed one received byte
    ///
    /// Returns a report when the byte completes a line; the line has then
    /// already been parsed and dispatched.
    pub fn push_byte(&mut self, byte: u8) -> Option<Handled> {
        let handled = match self.line.push(byte)? {
            Ok(line) => {
                let result = self.handle_line(&line);
                Handled { line, result }
            }
            Err(err) => Handled {
                line: String::new(),
                result: Err(err.into()),
            },
        };
        Some(handled)
    }

    /// Parse and dispatch one complete line
    pub fn handle_line(&mut self, line: &str) -> Result<CommandId, Rejected> {
        let command = parse_line(line)?;
        Ok(self.dispatcher.dispatch(&command)?)
    }

    pub fn buttons(&self) -> &ButtonMonitor<P, Outbox, N> {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonMonitor<P, Outbox, N> {
        &mut self.buttons
    }

    pub fn dispatcher(&self) -> &Dispatcher<M, S, B> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<M, S, B> {
        &mut self.dispatcher
    }

    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::dispatcher::tests::{MockBuzzer, MockStrip};
    use crate::traits::Rgb;
    use core::cell::Cell;
    use lumipad_protocol::ArgError;

    struct MockPin<'a> {
        high: &'a Cell<bool>,
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    type TestPanel<'a> = Panel<MockPin<'a>, MockStrip, MockStrip, MockBuzzer, 3>;

    fn panel(lines: &[Cell<bool>; 3]) -> TestPanel<'_> {
        Panel::new(
            PanelConfig::DEFAULT,
            core::array::from_fn(|i| MockPin { high: &lines[i] }),
            MockStrip::new(100),
            MockStrip::new(5),
            Some(MockBuzzer::default()),
        )
        .unwrap()
    }

    fn released() -> [Cell<bool>; 3] {
        core::array::from_fn(|_| Cell::new(true))
    }

    fn feed(panel: &mut TestPanel<'_>, bytes: &[u8]) -> Vec<Handled> {
        bytes.iter().filter_map(|&b| panel.push_byte(b)).collect()
    }

    fn drain(panel: &mut TestPanel<'_>) -> Vec<std::string::String> {
        core::iter::from_fn(|| panel.pop_notification())
            .map(|n| std::string::String::from(n.encode().as_str()))
            .collect()
    }

    #[test]
    fn test_button_transitions_become_notifications() {
        let lines = released();
        let mut panel = panel(&lines);

        panel.poll_buttons();
        assert!(drain(&mut panel).is_empty());

        lines[1].set(false);
        panel.poll_buttons();
        panel.poll_buttons();
        lines[1].set(true);
        lines[2].set(false);
        panel.poll_buttons();

        assert_eq!(
            drain(&mut panel),
            ["pressed 1\r\n", "released 1\r\n", "pressed 2\r\n"]
        );
    }

    #[test]
    fn test_set_then_show_over_bytes() {
        let lines = released();
        let mut panel = panel(&lines);

        let handled = feed(&mut panel, b"set 3 3 10 20 30\r\nshow\n");
        assert_eq!(handled.len(), 2);
        assert_eq!(handled[0].result(), Ok(CommandId::Set));
        assert_eq!(handled[0].line(), "set 3 3 10 20 30\r");
        assert_eq!(handled[1].result(), Ok(CommandId::Show));

        let matrix = panel.dispatcher().matrix();
        assert_eq!(matrix.pixels[33], Rgb::new(5, 10, 15));
        assert_eq!(matrix.shows(), 1);
    }

    #[test]
    fn test_partial_line_waits_for_newline() {
        let lines = released();
        let mut panel = panel(&lines);

        assert!(feed(&mut panel, b"set_status 0 2 2 2").is_empty());
        assert_eq!(panel.dispatcher().status().writes(), 0);

        let handled = feed(&mut panel, b"\n");
        assert_eq!(handled[0].result(), Ok(CommandId::SetStatus));
        assert_eq!(panel.dispatcher().status().pixels[0], Rgb::new(1, 1, 1));
    }

    #[test]
    fn test_rejected_lines_leave_leds_alone() {
        let lines = released();
        let mut panel = panel(&lines);

        let handled = feed(&mut panel, b"\n   \nbad!cmd 1\nblink\nset 1 2 3\nset 10 0 0 0 0\n");
        let results: Vec<_> = handled.iter().map(Handled::result).collect();
        assert_eq!(
            results,
            [
                Err(Rejected::NotACommand(NotACommand::Empty)),
                Err(Rejected::NotACommand(NotACommand::Empty)),
                Err(Rejected::NotACommand(NotACommand::InvalidName)),
                Err(Rejected::Dispatch(DispatchError::UnknownCommand)),
                Err(Rejected::Dispatch(DispatchError::InvalidArguments(
                    ArgError::Count {
                        expected: 5,
                        found: 3
                    }
                ))),
                Err(Rejected::Dispatch(DispatchError::OutOfRange(CommandId::Set))),
            ]
        );

        assert!(panel.dispatcher().matrix().ops.is_empty());
        assert!(panel.dispatcher().status().ops.is_empty());

        // The panel keeps going
        let handled = feed(&mut panel, b"clear\n");
        assert_eq!(handled[0].result(), Ok(CommandId::Clear));
    }

    #[test]
    fn test_handled_command_echo() {
        let lines = released();
        let mut panel = panel(&lines);

        let handled = feed(&mut panel, b"  set_buzzer    1 \n");
        let echo = std::format!("{}", handled[0].command().unwrap());
        assert_eq!(echo, "set_buzzer 1");
        assert!(panel.dispatcher().buzzer().unwrap().is_on());

        let handled = feed(&mut panel, b"bad!cmd\n");
        assert!(handled[0].command().is_none());
    }

    #[test]
    fn test_overlong_line_is_dropped() {
        let lines = released();
        let mut panel = panel(&lines);

        let mut bytes = std::vec![b'x'; MAX_LINE_LEN + 10];
        bytes.push(b'\n');
        let handled = feed(&mut panel, &bytes);
        assert_eq!(handled[0].result(), Err(Rejected::Line(LineError::Overflow)));
        assert_eq!(handled[0].line(), "");
    }

    #[test]
    fn test_outbox_drops_when_full() {
        let mut outbox = Outbox::default();
        for i in 0..OUTBOX_LEN + 2 {
            notify(&mut outbox, i, true);
        }
        assert_eq!(outbox.len(), OUTBOX_LEN);
        assert_eq!(outbox.dropped(), 2);
        assert_eq!(outbox.pop(), Some(Notification::Pressed(0)));
    }

    #[test]
    fn test_buttons_and_commands_interleave() {
        let lines = released();
        let mut panel = panel(&lines);

        panel.poll_buttons();
        feed(&mut panel, b"set_status 2 ");
        lines[0].set(false);
        panel.poll_buttons();
        feed(&mut panel, b"8 8 8\n");

        assert_eq!(drain(&mut panel), ["pressed 0\r\n"]);
        assert_eq!(panel.dispatcher().status().pixels[2], Rgb::new(4, 4, 4));
        assert!(panel.buttons().is_pressed(0));
    }
}
