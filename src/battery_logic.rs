/// Full-scale SAADC reading at 12-bit resolution.
const SAADC_FULL_SCALE: i32 = 4096;

/// Input range in mV with gain 1/6 and the 0.6 V internal reference.
const SAADC_RANGE_MV: i32 = 3600;

/// The VDDH channel is divided by five before it reaches the ADC.
const VDDH_DIVIDER: i32 = 5;

/// Convert a raw VDDH/5 sample to battery millivolts.
///
/// Negative readings (noise around 0 V) clamp to zero.
pub fn sample_to_millivolts(raw: i16) -> u16 {
    let raw = i32::from(raw).max(0);
    let mv = raw * SAADC_RANGE_MV * VDDH_DIVIDER / SAADC_FULL_SCALE;
    mv.min(i32::from(u16::MAX)) as u16
}

/// Li-ion state of charge from cell voltage, linear between 3.45 V and 4.2 V.
pub fn millivolts_to_percent(mv: u16) -> u8 {
    if mv >= 4200 {
        100
    } else if mv <= 3450 {
        0
    } else {
        (u32::from(mv) * 2 / 15 - 459) as u8
    }
}
