//! # Configuration Document
//!
//! The text buffer the user edits. It is never parsed locally.

/// Where the document would live on the simulated server.
pub const DOCUMENT_PATH: &str = "/etc/netplan/01-netcfg.yaml";

/// The starting point of every exercise: LAN interface still on DHCP.
pub const INITIAL_DOCUMENT: &str = "# Netplan configuration
network:
  version: 2
  renderer: networkd
  ethernets:
    enp3s0: # WAN interface
      dhcp4: true
    enp4s0: # LAN interface (configure this one)
      dhcp4: no
";

/// The editor always shows at least this many numbered rows.
pub const MIN_EDITOR_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDocument {
    text: String,
}

impl ConfigurationDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn canonical() -> Self {
        Self::new(INITIAL_DOCUMENT)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_canonical(&self) -> bool {
        self.text == INITIAL_DOCUMENT
    }

    /// Counts lines the way a text area does: a trailing newline opens an empty last line.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn editor_rows(&self) -> usize {
        self.line_count().max(MIN_EDITOR_ROWS)
    }
}

impl Default for ConfigurationDocument {
    fn default() -> Self {
        Self::canonical()
    }
}

impl From<String> for ConfigurationDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for ConfigurationDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
