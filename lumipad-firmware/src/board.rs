//! Board wiring
//!
//! The revision is picked at build time. Buttons, LED power and buzzer are
//! claimed from the pin bank by number; the LED data lines and the command
//! UART need pins with concrete types for their PIO and UART functions, so
//! they are split off here and must match `BoardConfig`.

use embassy_rp::peripherals::{DMA_CH0, DMA_CH1, PIN_0, PIN_1, PIN_2, PIN_3, PIO0, UART0};
use embassy_rp::{Peri, Peripherals};
use lumipad_core::config::{BoardConfig, PanelConfig, Revision, BUTTON_COUNT};
use lumipad_core::Panel;
use lumipad_drivers::GpioBuzzer;
use lumipad_hal_rp2040::{PinBank, PioStrip, RpInput, RpOutput};

#[cfg(not(feature = "rev-1-2"))]
pub const REVISION: Revision = Revision::Logic1_1;
#[cfg(feature = "rev-1-2")]
pub const REVISION: Revision = Revision::Logic1_2;

pub const BOARD: BoardConfig = BoardConfig::for_revision(REVISION);
pub const PANEL: PanelConfig = PanelConfig::DEFAULT;

pub const MATRIX_LEN: usize = PANEL.matrix_len();
pub const STATUS_LEN: usize = PANEL.status_len;

pub type MatrixStrip = PioStrip<'static, PIO0, 0, MATRIX_LEN>;
pub type StatusStrip = PioStrip<'static, PIO0, 1, STATUS_LEN>;
pub type BoardBuzzer = GpioBuzzer<RpOutput<'static>>;
pub type BoardPanel =
    Panel<RpInput<'static>, MatrixStrip, StatusStrip, BoardBuzzer, BUTTON_COUNT>;

/// Pins with fixed functions
pub struct FixedPins {
    /// GPIO0, `BOARD.uart_tx`
    pub uart_tx: Peri<'static, PIN_0>,
    /// GPIO1, `BOARD.uart_rx`
    pub uart_rx: Peri<'static, PIN_1>,
    /// GPIO2, `BOARD.matrix_data`
    pub matrix_data: Peri<'static, PIN_2>,
    /// GPIO3, `BOARD.status_data`
    pub status_data: Peri<'static, PIN_3>,
}

/// Non-GPIO peripherals the firmware uses
pub struct RemainingPeripherals {
    pub uart0: Peri<'static, UART0>,
    pub pio0: Peri<'static, PIO0>,
    pub dma_ch0: Peri<'static, DMA_CH0>,
    pub dma_ch1: Peri<'static, DMA_CH1>,
}

/// Split the chip into fixed pins, the pin bank and the peripherals
pub fn split(p: Peripherals) -> (FixedPins, PinBank, RemainingPeripherals) {
    let fixed = FixedPins {
        uart_tx: p.PIN_0,
        uart_rx: p.PIN_1,
        matrix_data: p.PIN_2,
        status_data: p.PIN_3,
    };

    let bank = PinBank::new([
        None,
        None,
        None,
        None,
        Some(p.PIN_4.into()),
        Some(p.PIN_5.into()),
        Some(p.PIN_6.into()),
        Some(p.PIN_7.into()),
        Some(p.PIN_8.into()),
        Some(p.PIN_9.into()),
        Some(p.PIN_10.into()),
        Some(p.PIN_11.into()),
        Some(p.PIN_12.into()),
        Some(p.PIN_13.into()),
        Some(p.PIN_14.into()),
        Some(p.PIN_15.into()),
        Some(p.PIN_16.into()),
        Some(p.PIN_17.into()),
        Some(p.PIN_18.into()),
        Some(p.PIN_19.into()),
        Some(p.PIN_20.into()),
        Some(p.PIN_21.into()),
        Some(p.PIN_22.into()),
        Some(p.PIN_23.into()),
        Some(p.PIN_24.into()),
        Some(p.PIN_25.into()),
        Some(p.PIN_26.into()),
        Some(p.PIN_27.into()),
        Some(p.PIN_28.into()),
        Some(p.PIN_29.into()),
    ]);

    let peripherals = RemainingPeripherals {
        uart0: p.UART0,
        pio0: p.PIO0,
        dma_ch0: p.DMA_CH0,
        dma_ch1: p.DMA_CH1,
    };

    (fixed, bank, peripherals)
}

// The typed pins above are GPIO0-3 on every revision
const _: () = {
    assert!(BOARD.uart_tx == 0);
    assert!(BOARD.uart_rx == 1);
    assert!(BOARD.matrix_data == 2);
    assert!(BOARD.status_data == 3);
};
