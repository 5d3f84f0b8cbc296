//! Mock hardware for integration tests
//!
//! Each mock records how it was driven so tests can assert on call order
//! as well as on results.

#![allow(dead_code)]

pub mod scenarios;

use aquanode_core::{
    adc::{MultiChannelAdc, ScanResult, SharedScan},
    time::FixedTime,
    EnvironmentReading, EnvironmentSensor, NodeParts, Radio, SendOutcome, SensorError,
    SensorResult, ThermalCamera, ThermalFrame, WaterTemperatureProbe,
};

/// Four-rank ADC returning fixed counts
#[derive(Debug, Default)]
pub struct MockAdc {
    pub counts: ScanResult,
    pub fail: bool,
    pub scans: u32,
}

impl MockAdc {
    /// TDS on rank 0, pH on rank 2
    pub fn with_probes(tds: u16, ph: u16) -> Self {
        Self { counts: [tds, 0, ph, 0], fail: false, scans: 0 }
    }
}

impl MultiChannelAdc for MockAdc {
    fn scan(&mut self) -> SensorResult<ScanResult> {
        self.scans += 1;
        if self.fail {
            return Err(SensorError::Bus { source_name: "adc" });
        }
        Ok(self.counts)
    }
}

/// Environmental sensor with a canned answer
#[derive(Debug)]
pub struct MockEnvironment {
    pub reading: Option<EnvironmentReading>,
}

impl EnvironmentSensor for MockEnvironment {
    fn read_environment(&mut self) -> SensorResult<EnvironmentReading> {
        self.reading.ok_or(SensorError::Bus { source_name: "i2c" })
    }
}

/// Water probe with a canned answer
#[derive(Debug)]
pub struct MockProbe {
    pub result: SensorResult<f32>,
    pub reads: u32,
}

impl MockProbe {
    pub fn at(celsius: f32) -> Self {
        Self { result: Ok(celsius), reads: 0 }
    }

    pub fn absent() -> Self {
        Self { result: Err(SensorError::NotPresent { sensor: "DS18B20" }), reads: 0 }
    }
}

impl WaterTemperatureProbe for MockProbe {
    fn read_temperature(&mut self) -> SensorResult<f32> {
        self.reads += 1;
        self.result
    }
}

/// Thermal camera that logs every call
#[derive(Debug, Default)]
pub struct MockCamera {
    pub frame: Option<ThermalFrame>,
    pub wake_fails: bool,
    pub calls: Vec<&'static str>,
}

impl MockCamera {
    pub fn with_frame(frame: ThermalFrame) -> Self {
        Self { frame: Some(frame), ..Self::default() }
    }
}

impl ThermalCamera for MockCamera {
    fn wake(&mut self) -> SensorResult<()> {
        self.calls.push("wake");
        if self.wake_fails {
            return Err(SensorError::Bus { source_name: "i2c" });
        }
        Ok(())
    }

    fn capture(&mut self) -> SensorResult<ThermalFrame> {
        self.calls.push("capture");
        self.frame.clone().ok_or(SensorError::NotPresent { sensor: "AMG8833" })
    }

    fn sleep(&mut self) -> SensorResult<()> {
        self.calls.push("sleep");
        Ok(())
    }
}

/// One recorded uplink
#[derive(Debug, Clone, PartialEq)]
pub struct Uplink {
    pub port: u8,
    pub bytes: Vec<u8>,
    pub confirmed: bool,
}

/// Radio that records uplinks and answers with a fixed outcome
#[derive(Debug)]
pub struct MockRadio {
    pub outcome: SendOutcome,
    pub uplinks: Vec<Uplink>,
}

impl MockRadio {
    pub fn answering(outcome: SendOutcome) -> Self {
        Self { outcome, uplinks: Vec::new() }
    }
}

impl Radio for MockRadio {
    fn send(&mut self, port: u8, payload: &[u8], confirmed: bool) -> SendOutcome {
        self.uplinks.push(Uplink { port, bytes: payload.to_vec(), confirmed });
        self.outcome
    }
}

/// Parts type used by the node tests
pub type MockParts<'a> =
    NodeParts<MockEnvironment, MockProbe, MockCamera, SharedScan<MockAdc, &'a FixedTime>, MockRadio>;

/// Healthy hardware reading the standard scenario
pub fn healthy_parts(clock: &FixedTime) -> MockParts<'_> {
    NodeParts {
        environment: MockEnvironment { reading: Some(scenarios::lab_environment()) },
        water_probe: MockProbe::at(18.5),
        camera: MockCamera::with_frame(ThermalFrame::uniform(100)),
        adc: SharedScan::new(MockAdc::with_probes(400, 2048), clock),
        radio: MockRadio::answering(SendOutcome::Sent),
    }
}
