use std::fmt;

/// Where the simulation stands. Exactly one value is current at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationStatus {
    #[default]
    Idle,
    Checking,
    Success,
    Error,
}

impl SimulationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationStatus::Idle => "idle",
            SimulationStatus::Checking => "checking",
            SimulationStatus::Success => "success",
            SimulationStatus::Error => "error",
        }
    }

    /// The LAN link on the diagram is up only after a successful check.
    pub fn is_connected(&self) -> bool {
        matches!(self, SimulationStatus::Success)
    }
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
