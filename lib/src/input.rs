use std::fmt;

/// A data input consumed by the simulator.
///
/// The simulator reads these files itself; `bgpsim` only ever checks that they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// CAIDA AS-relationships file describing the inter-AS topology.
    Caida,
    /// Route announcements CSV (`asn,prefix,rov_invalid`).
    Announcements,
    /// List of ASNs performing route origin validation.
    RovAsns,
}

impl Input {
    /// The simulator command line flag that carries this input.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Caida => "--caida",
            Self::Announcements => "--announcements",
            Self::RovAsns => "--rov-asns",
        }
    }

    /// Human readable label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Caida => "CAIDA file",
            Self::Announcements => "Announcements file",
            Self::RovAsns => "ROV ASNs file",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}
