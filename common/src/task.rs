//! # Task Parameters
//!
//! The exercise a configuration is judged against.
//!
//! Every field is free text. Nothing here checks that the client address
//! belongs to the client range or that the server address shares its network:
//! that judgment belongs to the reasoning service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_LAN_IP: &str = "192.168.10.1/24";
pub const DEFAULT_CLIENT_RANGE: &str = "192.168.10.0/24";
pub const DEFAULT_CLIENT_IP: &str = "192.168.10.5";
pub const DEFAULT_WAN_IP: &str = "203.0.113.10/24";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    /// Address and prefix the server's LAN interface must carry.
    pub server_lan_ip: String,
    /// Subnet the clients belong to.
    pub client_range: String,
    /// The probe client trying to reach the server.
    pub client_ip: String,
    /// Public-facing address, shown on the diagram only.
    pub wan_ip: String,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            server_lan_ip: DEFAULT_SERVER_LAN_IP.to_string(),
            client_range: DEFAULT_CLIENT_RANGE.to_string(),
            client_ip: DEFAULT_CLIENT_IP.to_string(),
            wan_ip: DEFAULT_WAN_IP.to_string(),
        }
    }
}

impl TaskConfig {
    /// Returns a copy where only `field` holds `value`.
    pub fn with_field(&self, field: TaskField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            TaskField::ServerLanIp => next.server_lan_ip = value,
            TaskField::ClientRange => next.client_range = value,
            TaskField::ClientIp => next.client_ip = value,
            TaskField::WanIp => next.wan_ip = value,
        }
        next
    }

    pub fn get(&self, field: TaskField) -> &str {
        match field {
            TaskField::ServerLanIp => &self.server_lan_ip,
            TaskField::ClientRange => &self.client_range,
            TaskField::ClientIp => &self.client_ip,
            TaskField::WanIp => &self.wan_ip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    ServerLanIp,
    ClientRange,
    ClientIp,
    WanIp,
}

impl TaskField {
    pub const ALL: [TaskField; 4] = [
        TaskField::ServerLanIp,
        TaskField::ClientRange,
        TaskField::ClientIp,
        TaskField::WanIp,
    ];

    /// Human readable label used by the task panel.
    pub fn label(&self) -> &'static str {
        match self {
            TaskField::ServerLanIp => "Server LAN IP",
            TaskField::ClientRange => "Client range",
            TaskField::ClientIp => "Client 01 IP",
            TaskField::WanIp => "WAN IP",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TaskField::ServerLanIp => "server-lan-ip",
            TaskField::ClientRange => "client-range",
            TaskField::ClientIp => "client-ip",
            TaskField::WanIp => "wan-ip",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TaskField {
    type Err = String;

    /// Accepts the kebab-case keys, the snake_case and camelCase spellings,
    /// and a few short aliases (`server`, `range`, `client`, `wan`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "serverlanip" | "server" | "lan" => Ok(TaskField::ServerLanIp),
            "clientrange" | "range" => Ok(TaskField::ClientRange),
            "clientip" | "client" => Ok(TaskField::ClientIp),
            "wanip" | "wan" => Ok(TaskField::WanIp),
            _ => Err(format!(
                "unknown task field '{s}', expected one of: {}",
                TaskField::ALL.map(|f| f.key()).join(", ")
            )),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
