#![cfg(test)]
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::oracle::ValidationOracle;
use netplan_trainer_common::task::TaskConfig;
use netplan_trainer_common::verdict::ValidationVerdict;
use tokio::sync::Notify;

pub const STATIC_LAN: &str = "network:
  version: 2
  renderer: networkd
  ethernets:
    enp3s0:
      dhcp4: true
    enp4s0:
      dhcp4: no
      addresses: [192.168.10.1/24]
";

pub const DHCP_LAN: &str = "network:
  version: 2
  ethernets:
    enp4s0:
      dhcp4: true
";

pub fn passing() -> ValidationVerdict {
    ValidationVerdict {
        is_valid_yaml: true,
        syntax_correct: true,
        connection_successful: true,
        errors: Vec::new(),
        explanation: "enp4s0 carries 192.168.10.1/24, Client 01 is in the same subnet.".into(),
        corrected_yaml: None,
    }
}

pub fn failing() -> ValidationVerdict {
    ValidationVerdict {
        is_valid_yaml: true,
        syntax_correct: true,
        connection_successful: false,
        errors: vec!["enp4s0 uses DHCP instead of a static address".into()],
        explanation: "Set dhcp4: no and add addresses: [192.168.10.1/24].".into(),
        corrected_yaml: None,
    }
}

/// Answers every call with the same verdict and records what it was asked.
pub struct ScriptedOracle {
    verdict: ValidationVerdict,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(String, TaskConfig)>>,
}

impl ScriptedOracle {
    pub fn new(verdict: ValidationVerdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValidationOracle for ScriptedOracle {
    async fn judge(
        &self,
        document: &ConfigurationDocument,
        task: &TaskConfig,
    ) -> anyhow::Result<ValidationVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((document.text().to_string(), task.clone()));
        Ok(self.verdict.clone())
    }
}

/// Fails like an unreachable host.
pub struct UnreachableOracle;

#[async_trait]
impl ValidationOracle for UnreachableOracle {
    async fn judge(
        &self,
        _document: &ConfigurationDocument,
        _task: &TaskConfig,
    ) -> anyhow::Result<ValidationVerdict> {
        anyhow::bail!("error sending request: dns error: failed to lookup address")
    }
}

/// Holds every answer until [`GatedOracle::release`] is called.
pub struct GatedOracle {
    verdict: ValidationVerdict,
    gate: Notify,
    pub entered: Notify,
}

impl GatedOracle {
    pub fn new(verdict: ValidationVerdict) -> Self {
        Self {
            verdict,
            gate: Notify::new(),
            entered: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl ValidationOracle for GatedOracle {
    async fn judge(
        &self,
        _document: &ConfigurationDocument,
        _task: &TaskConfig,
    ) -> anyhow::Result<ValidationVerdict> {
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(self.verdict.clone())
    }
}
