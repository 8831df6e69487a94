//! Sharp memory LCD (LS011B7DH03) driver for the nice!view.
//!
//! The panel speaks a write-only, LSB-first protocol with an active-high
//! chip select:
//!
//! ```text
//! [cmd] ([line address] [20 data bytes] [0x00])* [0x00]
//! ```
//!
//! The SPIM peripheral shifts MSB first, so every byte is bit-reversed
//! before it goes out. VCOM has to alternate at least once a second or the
//! liquid crystal takes a DC bias; it rides along in every command byte.

use embassy_time::Timer;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;
use hammerbeam::config::SCREEN_HEIGHT;
use hammerbeam::screen::{Framebuffer, LINE_BYTES};
use hammerbeam::Error;

const CMD_WRITE_LINE: u8 = 0x01;
const CMD_VCOM: u8 = 0x02;
const CMD_CLEAR: u8 = 0x04;

/// CS setup/hold time, rounded up.
const CS_SETTLE_US: u64 = 6;

pub struct SharpDisplay<SPI, CS> {
    spi: SPI,
    cs: CS,
    vcom: bool,
}

impl<SPI, CS> SharpDisplay<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            vcom: false,
        }
    }

    /// Blank the panel memory.
    pub async fn clear(&mut self) -> Result<(), Error> {
        let cmd = self.command(CMD_CLEAR);
        self.transaction(&[cmd, 0x00], core::iter::empty()).await
    }

    /// Send every dirty line of `fb` and mark it clean.
    pub async fn flush(&mut self, fb: &mut Framebuffer) -> Result<(), Error> {
        if !fb.is_dirty() {
            return Ok(());
        }
        let cmd = self.command(CMD_WRITE_LINE);
        let lines = fb.dirty_lines().map(|y| line_packet(y, fb.line(y)));
        self.transaction(&[cmd], lines).await?;
        fb.mark_clean();
        Ok(())
    }

    /// Flip VCOM without touching panel memory.
    pub async fn toggle_vcom(&mut self) -> Result<(), Error> {
        self.vcom = !self.vcom;
        let cmd = self.command(0);
        self.transaction(&[cmd, 0x00], core::iter::empty()).await
    }

    fn command(&self, cmd: u8) -> u8 {
        let cmd = if self.vcom { cmd | CMD_VCOM } else { cmd };
        cmd.reverse_bits()
    }

    async fn transaction<L>(&mut self, head: &[u8], lines: L) -> Result<(), Error>
    where
        L: Iterator<Item = [u8; LINE_BYTES + 2]>,
    {
        self.cs.set_high().map_err(|_| Error::ChipSelect)?;
        Timer::after_micros(CS_SETTLE_US).await;

        let mut result = self.spi.write(head).await;
        let mut sent_lines = false;
        for packet in lines {
            if result.is_err() {
                break;
            }
            result = self.spi.write(&packet).await;
            sent_lines = true;
        }
        if result.is_ok() && sent_lines {
            // Trailing dummy byte closes a multi-line write.
            result = self.spi.write(&[0x00]).await;
        }
        if result.is_ok() {
            result = self.spi.flush().await;
        }

        Timer::after_micros(CS_SETTLE_US).await;
        self.cs.set_low().map_err(|_| Error::ChipSelect)?;
        result.map_err(|_| Error::Display)
    }
}

/// One line on the wire: 1-based address, pixel bytes, dummy byte.
fn line_packet(y: usize, data: &[u8; LINE_BYTES]) -> [u8; LINE_BYTES + 2] {
    debug_assert!(y < SCREEN_HEIGHT as usize);
    let mut packet = [0u8; LINE_BYTES + 2];
    packet[0] = (y as u8 + 1).reverse_bits();
    for (out, byte) in packet[1..=LINE_BYTES].iter_mut().zip(data) {
        *out = byte.reverse_bits();
    }
    packet
}
