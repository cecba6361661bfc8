//! Lumipad - button and LED panel firmware
//!
//! Main firmware binary for RP2040-based panel boards. Nine buttons report
//! `pressed`/`released` over the command UART; the host answers with text
//! commands that paint a 10×10 WS2812 matrix, a five-pixel status strip and
//! drive the buzzer.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::{Common, InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumipad_core::dispatch::available;
use lumipad_core::Panel;
use lumipad_drivers::{GpioBuzzer, LedPower};
use lumipad_hal::UartConfig;
use lumipad_hal_rp2040::uart::embassy_config;
use lumipad_hal_rp2040::{PioStrip, RpInput, RpOutput, RpUartRx, RpUartTx};

use crate::board::{BoardPanel, BOARD, PANEL};

mod board;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// PIO0 common block, shared by both strips for the firmware's lifetime
static PIO0_COMMON: StaticCell<Common<'static, PIO0>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumipad firmware starting ({})", BOARD.revision);
    unwrap!(BOARD.validate());

    let p = embassy_rp::init(Default::default());
    let (fixed, mut bank, rest) = board::split(p);
    info!("Peripherals initialized");

    // LED supply on before any frame goes out
    let power_pin = unwrap!(bank.take(BOARD.led_power));
    let led_power = LedPower::new_enabled(RpOutput::new(power_pin, false));

    let buzzer = match BOARD.buzzer {
        Some(pin) => Some(GpioBuzzer::new_active_high(RpOutput::new(
            unwrap!(bank.take(pin)),
            false,
        ))),
        None => None,
    };

    let buttons = BOARD.buttons.map(|pin| RpInput::pull_up(unwrap!(bank.take(pin))));

    // Command UART, 115200 8N1
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(
        rest.uart0,
        fixed.uart_tx,
        fixed.uart_rx,
        embassy_config(&UartConfig::default()),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized");

    // Both strips share PIO0 and one copy of the WS2812 program
    let Pio { common, sm0, sm1, .. } = Pio::new(rest.pio0, Irqs);
    let common = PIO0_COMMON.init(common);
    let program = PioWs2812Program::new(common);
    let matrix = PioStrip::new(PioWs2812::new(
        common,
        sm0,
        rest.dma_ch0,
        fixed.matrix_data,
        &program,
    ));
    let status = PioStrip::new(PioWs2812::new(
        common,
        sm1,
        rest.dma_ch1,
        fixed.status_data,
        &program,
    ));
    info!("PIO WS2812 strips initialized");

    let panel: BoardPanel = unwrap!(Panel::new(PANEL, buttons, matrix, status, buzzer));

    info!(
        "{} buttons, buzzer {}",
        panel.buttons().count(),
        if BOARD.buzzer.is_some() { "fitted" } else { "absent" }
    );
    for entry in available(BOARD.buzzer.is_some()) {
        debug!("command {=str} ({} args)", entry.name(), entry.signature.len());
    }

    spawner
        .spawn(tasks::panel_task(
            panel,
            RpUartTx::new(tx),
            RpUartRx::new(rx),
            led_power,
        ))
        .unwrap();

    info!("Lumipad running");
}
