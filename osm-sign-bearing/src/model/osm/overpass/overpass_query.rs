use crate::model::feature::SignKind;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// top-level ADT for the Overpass API Language described at
/// <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide>.
/// renders to the query text that produces an extract for this tool.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum OverpassQuery {
    /// sign nodes of one kind that have no `direction` tag, found within each
    /// of the given areas, along with the ways that contain them and all nodes
    /// of those ways.
    SignsWithoutDirection {
        kind: SignKind,
        area_ids: Vec<i64>,
        timeout_seconds: u32,
    },
}

impl OverpassQuery {
    pub fn signs_without_direction(
        kind: SignKind,
        area_ids: &[i64],
        timeout_seconds: u32,
    ) -> OverpassQuery {
        OverpassQuery::SignsWithoutDirection {
            kind,
            area_ids: area_ids.to_vec(),
            timeout_seconds,
        }
    }
}

impl Display for OverpassQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverpassQuery::SignsWithoutDirection {
                kind,
                area_ids,
                timeout_seconds,
            } => {
                writeln!(f, "[out:json][timeout:{timeout_seconds}];")?;
                for (idx, area_id) in area_ids.iter().enumerate() {
                    // the first set is `.searchArea`, subsequent sets are numbered from 2
                    let set_name = match idx {
                        0 => String::from("searchArea"),
                        _ => format!("searchArea{}", idx + 1),
                    };
                    writeln!(f, "area(id:{area_id})->.{set_name};")?;
                    writeln!(
                        f,
                        "node[\"highway\"=\"{}\"][!\"direction\"](area.{set_name});",
                        kind.highway_tag()
                    )?;
                    writeln!(f, "way(bn);")?;
                    writeln!(f, "(._;>;);")?;
                    writeln!(f, "out body;")?;
                }
                Ok(())
            }
        }
    }
}
