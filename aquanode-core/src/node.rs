//! Transmission cycle
//!
//! ## Sequence
//!
//! ```text
//! environment ─► water temp ─► pH ─► TDS ─► thermal ─► summary ─► encode ─► send
//!                    │          ▲      ▲       │
//!                    └──────────┴──────┘       └─ wake, capture, stats, Format B, sleep
//!               compensation temperature
//! ```
//!
//! Every step logs and absorbs its own failure. A dead probe costs its
//! channel, never the uplink. The water temperature doubles as the
//! compensation temperature for pH and TDS; without it the configured
//! fallback is used.
//!
//! ## Scheduling
//!
//! [`TxTimer`] decides *when* to run a cycle: periodically, or right away
//! after an external trigger such as a button press. The node itself has no
//! notion of time beyond what the shared ADC scan needs.

use crate::adc::ChannelSampler;
use crate::config::NodeConfig;
use crate::constants::thermal::THERMAL_COMPRESSED_ENCODING_BYTES;
use crate::errors::ConfigResult;
use crate::payload::{EncodedPayload, PayloadEncoder, PayloadInputs, ThermalSummary};
use crate::ports::{EnvironmentSensor, Radio, SendOutcome, ThermalCamera, WaterTemperatureProbe};
use crate::sensors::{EnvironmentReading, PhReading, PhSensor, TdsReading, TdsSensor};
use crate::thermal::{encode_for_transmission, ThermalStats};
use crate::time::{elapsed_ms, Timestamp};

/// Everything gathered in one cycle, before encoding
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReadings {
    /// Environmental sample
    pub environment: Option<EnvironmentReading>,
    /// Water probe temperature (°C)
    pub water_temperature_c: Option<f32>,
    /// Temperature the analog probes were compensated with (°C)
    pub compensation_temperature_c: f32,
    /// pH reading, possibly flagged invalid
    pub ph: Option<PhReading>,
    /// TDS reading, possibly flagged invalid
    pub tds: Option<TdsReading>,
    /// Thermal statistics, `None` when capture or encoding failed
    pub thermal_stats: Option<ThermalStats>,
    /// Format B thermal image
    pub thermal_image: [u8; THERMAL_COMPRESSED_ENCODING_BYTES],
}

impl CycleReadings {
    /// Encoder view of these readings
    pub fn payload_inputs(&self, config: &NodeConfig) -> PayloadInputs<'_> {
        PayloadInputs {
            environment: self.environment,
            water_temperature_c: self.water_temperature_c,
            ph: self.ph,
            tds: self.tds,
            position: config.position,
            thermal: self.thermal_stats.map(|stats| ThermalSummary {
                stats,
                compressed: &self.thermal_image,
            }),
        }
    }
}

/// Outcome of one full cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// Readings that went into the payload
    pub readings: CycleReadings,
    /// Bytes handed to the radio
    pub payload: EncodedPayload,
    /// What the radio stack said
    pub outcome: SendOutcome,
}

/// Collaborators a node is assembled from
pub struct NodeParts<E, W, C, A, R> {
    /// Pressure / air temperature / humidity
    pub environment: E,
    /// Water temperature probe
    pub water_probe: W,
    /// Thermal camera
    pub camera: C,
    /// Shared ADC scan for the pH and TDS ranks
    pub adc: A,
    /// LoRaWAN send primitive
    pub radio: R,
}

/// Water-quality node: sensors, calibration state and uplink policy
pub struct Node<E, W, C, A, R> {
    config: NodeConfig,
    encoder: PayloadEncoder,
    ph: PhSensor,
    tds: TdsSensor,
    parts: NodeParts<E, W, C, A, R>,
}

impl<E, W, C, A, R> Node<E, W, C, A, R>
where
    E: EnvironmentSensor,
    W: WaterTemperatureProbe,
    C: ThermalCamera,
    A: ChannelSampler,
    R: Radio,
{
    /// Assemble a node with default probe calibration
    pub fn new(config: NodeConfig, parts: NodeParts<E, W, C, A, R>) -> ConfigResult<Self> {
        config.validate()?;
        log_info!(
            "Node ready: region {}, port {}, every {} ms",
            config.region.name(),
            config.app_port,
            config.tx_interval_ms
        );

        Ok(Self {
            encoder: config.encoder(),
            config,
            ph: PhSensor::default(),
            tds: TdsSensor::default(),
            parts,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// pH reader, e.g. for calibration between cycles
    pub fn ph_sensor_mut(&mut self) -> &mut PhSensor {
        &mut self.ph
    }

    /// TDS reader, e.g. for calibration between cycles
    pub fn tds_sensor_mut(&mut self) -> &mut TdsSensor {
        &mut self.tds
    }

    /// Collaborators
    pub fn parts(&self) -> &NodeParts<E, W, C, A, R> {
        &self.parts
    }

    /// Collaborators, mutably
    pub fn parts_mut(&mut self) -> &mut NodeParts<E, W, C, A, R> {
        &mut self.parts
    }

    /// Take the node apart again
    pub fn into_parts(self) -> NodeParts<E, W, C, A, R> {
        self.parts
    }

    /// Read every sensor once
    pub fn gather(&mut self) -> CycleReadings {
        let environment = match self.parts.environment.read_environment() {
            Ok(env) => Some(env),
            Err(err) => {
                log_error!("Environment sensor read failed: {}", err);
                None
            }
        };

        let water_temperature_c = match self.parts.water_probe.read_temperature() {
            Ok(celsius) => Some(celsius),
            Err(err) => {
                log_error!("Water temperature read failed: {}", err);
                None
            }
        };
        let compensation_temperature_c =
            water_temperature_c.unwrap_or(self.config.fallback_temperature_c);

        let ph = match self.ph.read(&mut self.parts.adc, compensation_temperature_c) {
            Ok(reading) => Some(reading),
            Err(err) => {
                log_error!("pH read failed: {}", err);
                None
            }
        };

        let tds = match self.tds.read(&mut self.parts.adc, compensation_temperature_c) {
            Ok(reading) => Some(reading),
            Err(err) => {
                log_error!("TDS read failed: {}", err);
                None
            }
        };

        let mut thermal_image = [0u8; THERMAL_COMPRESSED_ENCODING_BYTES];
        let thermal_stats = self.capture_thermal(&mut thermal_image);

        CycleReadings {
            environment,
            water_temperature_c,
            compensation_temperature_c,
            ph,
            tds,
            thermal_stats,
            thermal_image,
        }
    }

    /// Wake, capture, encode, then put the camera back to sleep
    ///
    /// Sleep is attempted whatever happened before it.
    fn capture_thermal(&mut self, image: &mut [u8; THERMAL_COMPRESSED_ENCODING_BYTES]) -> Option<ThermalStats> {
        let camera = &mut self.parts.camera;

        let stats = match camera.wake().and_then(|()| camera.capture()) {
            Ok(frame) => {
                let stats = ThermalStats::from_frame(&frame);
                match encode_for_transmission(&frame, image) {
                    Ok(len) if len > 0 => Some(stats),
                    Ok(_) => None,
                    Err(err) => {
                        log_error!("Thermal encoding failed: {}", err);
                        None
                    }
                }
            }
            Err(err) => {
                log_error!("Thermal capture failed: {}", err);
                None
            }
        };

        if let Err(err) = camera.sleep() {
            log_warn!("Thermal camera sleep failed: {}", err);
        }
        stats
    }

    /// Gather, encode and send one uplink
    pub fn run_cycle(&mut self) -> CycleReport {
        let readings = self.gather();
        log_summary(&readings);

        let payload = self.encoder.encode(&readings.payload_inputs(&self.config));
        let outcome = self.parts.radio.send(
            self.config.app_port,
            payload.as_bytes(),
            self.config.confirmed,
        );

        match outcome {
            SendOutcome::Sent => log_info!("Send request success ({} bytes)", payload.len()),
            SendOutcome::RetryAfter(ms) => log_warn!("Duty cycle busy, next Tx in {} ms", ms),
            SendOutcome::Failed => log_error!("Send request failed"),
        }

        CycleReport { readings, payload, outcome }
    }
}

fn log_summary(readings: &CycleReadings) {
    log_info!("==== Water quality sensor data ====");
    if let Some(env) = &readings.environment {
        log_info!(
            "Pressure: {} hPa, air: {} C, humidity: {} %",
            env.pressure_hpa,
            env.temperature_c,
            env.humidity_pct
        );
    }
    if let Some(celsius) = readings.water_temperature_c {
        log_info!("Water temperature: {} C", celsius);
    }
    if let Some(ph) = &readings.ph {
        log_info!("pH: {} ({}), valid: {}", ph.ph, ph.class().label(), ph.is_valid);
    }
    if let Some(tds) = &readings.tds {
        log_info!(
            "TDS: {} ppm, EC: {} uS/cm ({})",
            tds.tds_ppm,
            tds.conductivity_us_cm,
            tds.quality.label()
        );
    }
    if let Some(stats) = &readings.thermal_stats {
        log_info!("Thermal min/max/avg: {} / {} / {} C", stats.min, stats.max, stats.avg);
    }
}

/// Uplink timer with an immediate-send trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxTimer {
    interval_ms: u64,
    next_due: Timestamp,
    triggered: bool,
}

impl TxTimer {
    /// First uplink one interval after `now`
    pub fn new(interval_ms: u64, now: Timestamp) -> Self {
        Self { interval_ms, next_due: now.saturating_add(interval_ms), triggered: false }
    }

    /// Timer using the configured interval
    pub fn from_config(config: &NodeConfig, now: Timestamp) -> Self {
        Self::new(config.tx_interval_ms, now)
    }

    /// Request an uplink at the next poll
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    /// `true` when an uplink is due; re-arms the timer
    ///
    /// A timer that fell more than one interval behind restarts from `now`
    /// instead of firing a burst of catch-up uplinks.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if self.triggered {
            self.triggered = false;
            self.next_due = now.saturating_add(self.interval_ms);
            return true;
        }

        if now < self.next_due {
            return false;
        }

        self.next_due = if elapsed_ms(self.next_due, now) >= self.interval_ms {
            now.saturating_add(self.interval_ms)
        } else {
            self.next_due.saturating_add(self.interval_ms)
        };
        true
    }

    /// Milliseconds until the next periodic uplink
    pub fn remaining_ms(&self, now: Timestamp) -> u64 {
        elapsed_ms(now, self.next_due)
    }

    /// Period between uplinks
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_periodically() {
        let mut timer = TxTimer::new(10_000, 0);
        assert!(!timer.poll(9_999));
        assert!(timer.poll(10_000));
        assert!(!timer.poll(10_001));
        assert_eq!(timer.remaining_ms(15_000), 5_000);
        assert!(timer.poll(20_500));
        assert_eq!(timer.remaining_ms(20_500), 9_500);
    }

    #[test]
    fn timer_skips_missed_periods() {
        let mut timer = TxTimer::new(1_000, 0);
        assert!(timer.poll(5_500));
        assert!(!timer.poll(6_000));
        assert!(timer.poll(6_500));
    }

    #[test]
    fn trigger_sends_now_and_rearms() {
        let mut timer = TxTimer::new(10_000, 0);
        timer.trigger();
        assert!(timer.poll(3_000));
        assert!(!timer.poll(3_001));
        assert!(!timer.poll(12_999));
        assert!(timer.poll(13_000));
    }
}
