//! Canned symptom texts for common incidents
//!
//! Handy for demos and for checking what a given complaint produces.

/// A named symptom description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub symptoms: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "no_internet",
        symptoms: "Users report no internet access. They can't load websites or access cloud services.",
    },
    Preset {
        name: "dhcp",
        symptoms: "Devices unable to obtain IP address. Getting APIPA 169.254.x.x addresses or no IP at all.",
    },
    Preset {
        name: "dns",
        symptoms: "Can't resolve hostnames. Websites won't load but can ping IP addresses directly.",
    },
    Preset {
        name: "wifi_drop",
        symptoms: "WiFi keeps disconnecting. Users connected to WiFi but keeps dropping connection.",
    },
    Preset {
        name: "auth_8021x",
        symptoms: "802.1x authentication failures. Users can't authenticate to the network.",
    },
    Preset {
        name: "m365",
        symptoms: "Microsoft 365 / Teams / Outlook issues. Applications slow or not connecting.",
    },
    Preset {
        name: "flap_port",
        symptoms: "Interface flapping. Link going up and down repeatedly.",
    },
    Preset {
        name: "slow",
        symptoms: "Network is slow. High latency, buffering, packet loss reported.",
    },
];

pub fn lookup(name: &str) -> Option<&'static Preset> {
    let name = name.trim().to_lowercase().replace('-', "_");
    PRESETS.iter().find(|p| p.name == name)
}

/// clap value parser for `--preset`
pub fn parse_preset(raw: &str) -> Result<&'static Preset, String> {
    lookup(raw).ok_or_else(|| {
        let names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
        format!("unknown preset '{}' (available: {})", raw, names.join(", "))
    })
}
