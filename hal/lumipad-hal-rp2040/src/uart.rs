//! Buffered UART adapters for the command channel
//!
//! The interrupt-driven ring buffers fill in the background; the panel
//! loop drains them without ever waiting.

use embassy_rp::uart::{self, BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};
use lumipad_hal::uart::{DataBits, Parity, StopBits};
use lumipad_hal::{UartConfig, UartRx, UartTx};

/// UART line errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    Overrun,
    Break,
    Parity,
    Framing,
    Other,
}

impl From<uart::Error> for UartError {
    fn from(err: uart::Error) -> Self {
        match err {
            uart::Error::Overrun => Self::Overrun,
            uart::Error::Break => Self::Break,
            uart::Error::Parity => Self::Parity,
            uart::Error::Framing => Self::Framing,
            #[allow(unreachable_patterns)]
            _ => Self::Other,
        }
    }
}

/// Build the embassy-rp config for a line setting
pub fn embassy_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

/// Transmit half
pub struct RpUartTx {
    tx: BufferedUartTx,
}

impl RpUartTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for RpUartTx {
    type Error = UartError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        Write::write_all(&mut self.tx, data).map_err(UartError::from)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Write::flush(&mut self.tx).map_err(UartError::from)
    }
}

/// Receive half
pub struct RpUartRx {
    rx: BufferedUartRx,
}

impl RpUartRx {
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

impl UartRx for RpUartRx {
    type Error = UartError;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !ReadReady::read_ready(&mut self.rx)? {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match Read::read(&mut self.rx, &mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}
