//! hammerbeam - nice!view status widget firmware for the peripheral half.
//!
//! Two tasks:
//!
//! - `status_task` samples the battery and VBUS and publishes changes on
//!   [`STATUS_EVENTS`].
//! - `display_task` owns the widget, frame buffer, panel and RNG; it reacts
//!   to status events, advances the slideshow on schedule and keeps VCOM
//!   alternating.

#![no_std]
#![no_main]

mod art;
mod display;

use defmt::{info, unwrap, warn};
use display::SharpDisplay;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc, VddhDiv5Input};
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::usb::vbus_detect::{self, HardwareVbusDetect, VbusDetect};
use embassy_nrf::{bind_interrupts, peripherals, rng};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker, Timer};
use hammerbeam::config::{self, WidgetConfig};
use hammerbeam::{battery_logic, Framebuffer, StatusEvent, StatusSource, StatusWidget};
use static_cell::StaticCell;

use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => spim::InterruptHandler<peripherals::SPI0>;
    SAADC => saadc::InterruptHandler;
    RNG => rng::InterruptHandler<peripherals::RNG>;
    CLOCK_POWER => vbus_detect::InterruptHandler;
});

/// Status changes for the display task.
///
/// The split transport publishes `PeripheralStatusChanged` here as the link
/// to the central half comes and goes.
pub static STATUS_EVENTS: Channel<CriticalSectionRawMutex, StatusEvent, 8> = Channel::new();

static FRAMEBUFFER: StaticCell<Framebuffer> = StaticCell::new();

type Panel = SharpDisplay<Spim<'static, peripherals::SPI0>, Output<'static>>;
type Rng = rng::Rng<'static, peripherals::RNG>;

/// Readings taken at boot. The link is always down until the transport
/// says otherwise.
#[derive(Clone, Copy)]
struct BootStatus {
    soc: u8,
    usb: bool,
}

impl StatusSource for BootStatus {
    fn state_of_charge(&self) -> u8 {
        self.soc
    }

    fn usb_powered(&self) -> bool {
        self.usb
    }

    fn peripheral_connected(&self) -> bool {
        false
    }
}

struct Sampler {
    saadc: Saadc<'static, 1>,
    vbus: HardwareVbusDetect,
}

impl Sampler {
    async fn battery_percent(&mut self) -> u8 {
        let mut buf = [0i16; 1];
        self.saadc.sample(&mut buf).await;
        let mv = battery_logic::sample_to_millivolts(buf[0]);
        let pct = battery_logic::millivolts_to_percent(mv);
        info!("Battery: {} mV -> {}%", mv, pct);
        pct
    }

    fn usb_powered(&self) -> bool {
        self.vbus.is_usb_detected()
    }
}

#[embassy_executor::task]
async fn status_task(mut sampler: Sampler, mut last: BootStatus) -> ! {
    let polls_per_sample = config::BATTERY_SAMPLE_MS / config::VBUS_POLL_MS;
    let mut ticker = Ticker::every(Duration::from_millis(config::VBUS_POLL_MS));
    let mut polls = 0u64;

    loop {
        ticker.next().await;

        let usb = sampler.usb_powered();
        if usb != last.usb {
            info!("Status: usb powered={}", usb);
            last.usb = usb;
            STATUS_EVENTS
                .send(StatusEvent::UsbConnStateChanged { powered: usb })
                .await;
        }

        polls += 1;
        if polls < polls_per_sample {
            continue;
        }
        polls = 0;

        let soc = sampler.battery_percent().await;
        if soc != last.soc {
            last.soc = soc;
            STATUS_EVENTS
                .send(StatusEvent::BatteryStateChanged {
                    state_of_charge: soc,
                })
                .await;
        }
    }
}

async fn flush(panel: &mut Panel, fb: &mut Framebuffer) {
    if let Err(e) = panel.flush(fb).await {
        // Lines stay dirty and go out with the next refresh.
        warn!("Display: flush failed: {:?}", e);
    }
}

#[embassy_executor::task]
async fn display_task(
    mut panel: Panel,
    fb: &'static mut Framebuffer,
    mut rng: Rng,
    boot: BootStatus,
) -> ! {
    let frames = art::frames();
    let mut widget = StatusWidget::new(WidgetConfig::default(), &frames, &mut rng);

    if let Err(e) = panel.clear().await {
        warn!("Display: clear failed: {:?}", e);
        fb.mark_all_dirty();
    }
    // Drawing into the frame buffer is infallible.
    let Ok(()) = widget.init(&boot, fb, &mut rng, Instant::now().as_millis());
    flush(&mut panel, fb).await;

    let mut vcom = Ticker::every(Duration::from_millis(config::VCOM_TOGGLE_MS));

    loop {
        let next = widget.next_deadline();
        let due = async move {
            match next {
                Some(ms) => Timer::at(Instant::from_millis(ms)).await,
                None => core::future::pending().await,
            }
        };
        let woke = select3(STATUS_EVENTS.receive(), due, vcom.next()).await;

        match woke {
            Either3::First(event) => {
                let Ok(_) = widget.handle(event, fb);
            }
            Either3::Second(()) => {
                let Ok(_) = widget.tick(fb, &mut rng, Instant::now().as_millis());
            }
            Either3::Third(()) => {
                if let Err(e) = panel.toggle_vcom().await {
                    warn!("Display: vcom toggle failed: {:?}", e);
                }
                continue;
            }
        }
        flush(&mut panel, fb).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("hammerbeam: starting");

    // Panel: SPI0, write-only, active-high CS.
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M2;
    spi_config.mode = spim::MODE_0;
    let spi = Spim::new_txonly(p.SPI0, Irqs, p.P0_20, p.P0_17, spi_config);
    let cs = Output::new(p.P0_06, Level::Low, OutputDrive::Standard);
    let panel = SharpDisplay::new(spi, cs);

    // Battery on the internal VDDH/5 channel, USB via VBUS detection.
    let saadc = Saadc::new(
        p.SAADC,
        Irqs,
        saadc::Config::default(),
        [ChannelConfig::single_ended(VddhDiv5Input)],
    );
    saadc.calibrate().await;
    let mut sampler = Sampler {
        saadc,
        vbus: HardwareVbusDetect::new(Irqs),
    };
    let boot = BootStatus {
        soc: sampler.battery_percent().await,
        usb: sampler.usb_powered(),
    };

    let rng = rng::Rng::new(p.RNG, Irqs);
    let fb = FRAMEBUFFER.init(Framebuffer::new());

    unwrap!(spawner.spawn(display_task(panel, fb, rng, boot)));
    unwrap!(spawner.spawn(status_task(sampler, boot)));
}
