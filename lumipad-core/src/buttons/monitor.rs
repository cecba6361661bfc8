//! Edge-triggered button monitor

use lumipad_hal::InputPin;

/// Transition handler: `(context, index, pressed)`
///
/// Handlers are plain functions; whatever state they touch comes in
/// through the context passed to [`ButtonMonitor::poll`].
pub type ButtonCallback<C> = fn(&mut C, usize, bool);

/// Button monitor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError {
    /// Index is not below the button count
    OutOfRange { index: usize, count: usize },
}

impl core::fmt::Display for ButtonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "button {} out of range (count {})", index, count)
            }
        }
    }
}

struct Button<P, C> {
    pin: P,
    pressed: bool,
    changed: bool,
    callback: Option<ButtonCallback<C>>,
}

impl<P, C> Button<P, C> {
    fn new(pin: P) -> Self {
        Self {
            pin,
            pressed: false,
            changed: false,
            callback: None,
        }
    }
}

/// Fixed set of active-low buttons
///
/// Button identity is the index into the pin array given at construction.
/// Pins must already be inputs with the pull-up enabled; a low level reads
/// as pressed.
///
/// `C` is the context handed to callbacks on every transition.
pub struct ButtonMonitor<P, C, const N: usize> {
    buttons: [Button<P, C>; N],
}

impl<P: InputPin, C, const N: usize> ButtonMonitor<P, C, N> {
    /// Create a monitor with every button released and unchanged
    pub fn new(pins: [P; N]) -> Self {
        Self {
            buttons: pins.map(Button::new),
        }
    }

    /// Sample every button once, in index order
    ///
    /// A button whose level differs from its recorded state is marked
    /// changed and its callback runs before the next button is sampled.
    /// Every other button has its changed flag cleared.
    pub fn poll(&mut self, ctx: &mut C) {
        for (index, button) in self.buttons.iter_mut().enumerate() {
            let pressed = button.pin.is_low();
            if pressed == button.pressed {
                button.changed = false;
                continue;
            }

            button.changed = true;
            button.pressed = pressed;
            if let Some(callback) = button.callback {
                callback(ctx, index, pressed);
            }
        }
    }

    /// Replace the callback for one button
    ///
    /// `None` removes it.
    pub fn set_callback(
        &mut self,
        index: usize,
        callback: Option<ButtonCallback<C>>,
    ) -> Result<(), ButtonError> {
        let button = self.buttons.get_mut(index).ok_or(ButtonError::OutOfRange {
            index,
            count: N,
        })?;
        button.callback = callback;
        Ok(())
    }

    /// Install the same callback on every button
    pub fn set_all_callbacks(&mut self, callback: Option<ButtonCallback<C>>) {
        for button in self.buttons.iter_mut() {
            button.callback = callback;
        }
    }

    /// Current logical state of a button
    ///
    /// # Panics
    ///
    /// If `index >= count()`.
    pub fn is_pressed(&self, index: usize) -> bool {
        self.buttons[index].pressed
    }

    /// Whether the button changed state during the most recent poll
    ///
    /// # Panics
    ///
    /// If `index >= count()`.
    pub fn changed(&self, index: usize) -> bool {
        self.buttons[index].changed
    }

    /// Number of buttons
    pub const fn count(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Shared line level, so tests can flip it after the monitor owns the pin
    struct MockPin<'a> {
        high: &'a Cell<bool>,
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    /// Released buttons read high against the pull-up
    fn lines<const N: usize>() -> [Cell<bool>; N] {
        core::array::from_fn(|_| Cell::new(true))
    }

    fn monitor<'a, C, const N: usize>(lines: &'a [Cell<bool>; N]) -> ButtonMonitor<MockPin<'a>, C, N> {
        ButtonMonitor::new(core::array::from_fn(|i| MockPin { high: &lines[i] }))
    }

    type Log = Vec<(usize, bool)>;

    fn record(log: &mut Log, index: usize, pressed: bool) {
        log.push((index, pressed));
    }

    #[test]
    fn test_fresh_monitor() {
        let lines = lines::<9>();
        let monitor: ButtonMonitor<_, (), 9> = monitor(&lines);

        assert_eq!(monitor.count(), 9);
        for i in 0..9 {
            assert!(!monitor.is_pressed(i));
            assert!(!monitor.changed(i));
        }
    }

    #[test]
    fn test_empty_monitor() {
        let lines = lines::<0>();
        let mut monitor: ButtonMonitor<_, (), 0> = monitor(&lines);
        assert_eq!(monitor.count(), 0);
        monitor.poll(&mut ());
    }

    #[test]
    fn test_press_sets_changed_once() {
        let lines = lines::<3>();
        let mut monitor: ButtonMonitor<_, (), 3> = monitor(&lines);

        lines[1].set(false);
        monitor.poll(&mut ());
        assert!(monitor.is_pressed(1));
        assert!(monitor.changed(1));
        assert!(!monitor.changed(0));
        assert!(!monitor.changed(2));

        // No further change clears the flag
        monitor.poll(&mut ());
        assert!(monitor.is_pressed(1));
        assert!(!monitor.changed(1));
    }

    #[test]
    fn test_release() {
        let lines = lines::<1>();
        let mut monitor: ButtonMonitor<_, (), 1> = monitor(&lines);

        lines[0].set(false);
        monitor.poll(&mut ());
        lines[0].set(true);
        monitor.poll(&mut ());
        assert!(!monitor.is_pressed(0));
        assert!(monitor.changed(0));
    }

    #[test]
    fn test_high_level_at_start_is_not_a_transition() {
        let lines = lines::<2>();
        let mut monitor: ButtonMonitor<_, Log, 2> = monitor(&lines);
        monitor.set_all_callbacks(Some(record));

        let mut log = Log::new();
        monitor.poll(&mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn test_callback_runs_once_per_transition() {
        let lines = lines::<4>();
        let mut monitor: ButtonMonitor<_, Log, 4> = monitor(&lines);
        monitor.set_callback(2, Some(record)).unwrap();

        let mut log = Log::new();
        lines[2].set(false);
        monitor.poll(&mut log);
        monitor.poll(&mut log);
        lines[2].set(true);
        monitor.poll(&mut log);

        assert_eq!(log, [(2, true), (2, false)]);
    }

    #[test]
    fn test_callbacks_run_in_index_order() {
        let lines = lines::<3>();
        let mut monitor: ButtonMonitor<_, Log, 3> = monitor(&lines);
        monitor.set_all_callbacks(Some(record));

        let mut log = Log::new();
        lines[2].set(false);
        lines[0].set(false);
        monitor.poll(&mut log);

        assert_eq!(log, [(0, true), (2, true)]);
    }

    #[test]
    fn test_state_tracks_without_callback() {
        let lines = lines::<2>();
        let mut monitor: ButtonMonitor<_, Log, 2> = monitor(&lines);
        monitor.set_callback(0, Some(record)).unwrap();
        monitor.set_callback(0, None).unwrap();

        let mut log = Log::new();
        lines[0].set(false);
        monitor.poll(&mut log);

        assert!(log.is_empty());
        assert!(monitor.is_pressed(0));
        assert!(monitor.changed(0));
    }

    #[test]
    fn test_set_callback_out_of_range() {
        let lines = lines::<9>();
        let mut monitor: ButtonMonitor<_, Log, 9> = monitor(&lines);
        assert_eq!(
            monitor.set_callback(9, Some(record)),
            Err(ButtonError::OutOfRange { index: 9, count: 9 })
        );
    }

    #[test]
    #[should_panic]
    fn test_is_pressed_out_of_range_panics() {
        let lines = lines::<2>();
        let monitor: ButtonMonitor<_, (), 2> = monitor(&lines);
        monitor.is_pressed(2);
    }

    proptest! {
        #[test]
        fn prop_one_callback_per_transition(
            samples in proptest::collection::vec(proptest::collection::vec(any::<bool>(), 4), 0..64),
        ) {
            let lines = lines::<4>();
            let mut monitor: ButtonMonitor<_, Log, 4> = monitor(&lines);
            monitor.set_all_callbacks(Some(record));

            let mut log = Log::new();
            let mut expected = Log::new();
            let mut pressed = [false; 4];

            for sample in &samples {
                for (i, &down) in sample.iter().enumerate() {
                    lines[i].set(!down);
                }
                monitor.poll(&mut log);

                for (i, &down) in sample.iter().enumerate() {
                    let changed = down != pressed[i];
                    if changed {
                        expected.push((i, down));
                        pressed[i] = down;
                    }
                    prop_assert_eq!(monitor.changed(i), changed);
                    prop_assert_eq!(monitor.is_pressed(i), down);
                }
            }

            prop_assert_eq!(log, expected);
        }
    }
}
