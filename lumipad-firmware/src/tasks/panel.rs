//! Panel polling task
//!
//! One loop owns every piece of panel state: scan the buttons, send their
//! notifications, take at most one command line off the UART, push any
//! shown frames out to the strips, then yield.

use defmt::*;
use embassy_futures::yield_now;
use lumipad_core::dispatch::{CommandId, DispatchError};
use lumipad_core::{Handled, Rejected};
use lumipad_drivers::LedPower;
use lumipad_hal::{UartRx, UartTx};
use lumipad_hal_rp2040::{RpOutput, RpUartRx, RpUartTx};
use lumipad_protocol::NotACommand;

use crate::board::BoardPanel;

#[embassy_executor::task]
pub async fn panel_task(
    mut panel: BoardPanel,
    mut tx: RpUartTx,
    mut rx: RpUartRx,
    // Held so the supply stays switched on
    _led_power: LedPower<RpOutput<'static>>,
) {
    info!("Panel task started");

    let mut dropped_seen = 0;

    loop {
        panel.poll_buttons();
        while let Some(notification) = panel.pop_notification() {
            trace!("{}", notification);
            if let Err(e) = tx.write_blocking(notification.encode().as_bytes()) {
                warn!("UART write error: {}", e);
            }
        }

        let dropped = panel.outbox().dropped();
        if dropped != dropped_seen {
            warn!("{} button notifications dropped", dropped - dropped_seen);
            dropped_seen = dropped;
        }

        // Drain what has arrived, stopping after one complete line
        loop {
            match rx.try_read_byte() {
                Ok(Some(byte)) => {
                    if let Some(handled) = panel.push_byte(byte) {
                        report(&handled);
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("UART read error: {}", e);
                    break;
                }
            }
        }

        let dispatcher = panel.dispatcher_mut();
        dispatcher.matrix_mut().flush().await;
        dispatcher.status_mut().flush().await;

        yield_now().await;
    }
}

/// Log the outcome of one line on the debug channel
fn report(handled: &Handled) {
    if let Some(command) = handled.command() {
        debug!("Command: {}", command);
    }

    match handled.result() {
        Ok(id) => trace!("{} done", id),
        Err(Rejected::Line(e)) => warn!("Dropped line: {}", e),
        Err(Rejected::NotACommand(NotACommand::Empty)) => {}
        Err(Rejected::NotACommand(e)) => debug!("Not a command ({}): {=str}", e, handled.line()),
        Err(Rejected::Dispatch(DispatchError::UnknownCommand)) => {
            warn!("Invalid command: {=str}", handled.line())
        }
        Err(Rejected::Dispatch(DispatchError::InvalidArguments(e))) => {
            warn!("Invalid arguments ({}): {=str}", e, handled.line())
        }
        Err(Rejected::Dispatch(DispatchError::OutOfRange(CommandId::Set))) => {
            debug!("Invalid coordinates")
        }
        Err(Rejected::Dispatch(DispatchError::OutOfRange(_))) => debug!("Invalid index"),
    }
}
