use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the point traffic controls whose facing direction this tool infers.
/// each kind corresponds to a value of the OSM `highway` key on a node,
/// see <https://wiki.openstreetmap.org/wiki/Tag:highway%3Dstop>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignKind {
    GiveWay,
    Stop,
}

impl SignKind {
    pub const ALL: [SignKind; 2] = [SignKind::GiveWay, SignKind::Stop];

    /// the `highway=*` tag value identifying this sign kind
    pub fn highway_tag(&self) -> &'static str {
        match self {
            SignKind::GiveWay => "give_way",
            SignKind::Stop => "stop",
        }
    }

    /// marker icon prefix understood by the static map renderer
    pub fn marker_icon(&self) -> &'static str {
        match self {
            SignKind::GiveWay => "yield",
            SignKind::Stop => "stop",
        }
    }

    /// human readable name used in review task instructions
    pub fn description(&self) -> &'static str {
        match self {
            SignKind::GiveWay => "give way sign",
            SignKind::Stop => "stop sign",
        }
    }
}

impl Display for SignKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.highway_tag())
    }
}

impl FromStr for SignKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "give_way" => Ok(SignKind::GiveWay),
            "stop" => Ok(SignKind::Stop),
            other => Err(format!(
                "unknown sign kind '{other}', expected one of 'give_way', 'stop'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SignKind;
    use std::str::FromStr;

    #[test]
    fn test_from_str() {
        for kind in SignKind::ALL {
            assert_eq!(SignKind::from_str(&kind.to_string()), Ok(kind));
        }
        assert!(SignKind::from_str("traffic_signals").is_err());
    }

    #[test]
    fn test_serde_uses_tag_values() {
        let json = serde_json::to_string(&SignKind::GiveWay).expect("serializable");
        assert_eq!(json, "\"give_way\"");
    }
}
