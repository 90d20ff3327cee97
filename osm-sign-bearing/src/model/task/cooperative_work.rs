use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// the `cooperativeWork` member of a MapRoulette task, describing a tag fix the
/// reviewer can accept with one click. see
/// <https://github.com/maproulette/maproulette3/wiki/Cooperative-Challenges>.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CooperativeWork {
    pub meta: CooperativeWorkMeta,
    pub operations: Vec<ElementOperation>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CooperativeWorkMeta {
    pub version: u8,
    #[serde(rename = "type")]
    pub work_type: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementOperation {
    pub operation_type: String,
    pub data: ElementChange,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ElementChange {
    /// typed element reference, e.g. `node/123`
    pub id: String,
    pub operations: Vec<TagOperation>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "operation", content = "data", rename_all = "camelCase")]
pub enum TagOperation {
    SetTags(BTreeMap<String, String>),
    UnsetTags(Vec<String>),
}

impl CooperativeWork {
    /// a version 2 tag fix (type 1) that modifies a single element
    pub fn tag_fix(
        element_ref: String,
        set_tags: BTreeMap<String, String>,
        unset_tags: Vec<String>,
    ) -> CooperativeWork {
        CooperativeWork {
            meta: CooperativeWorkMeta {
                version: 2,
                work_type: 1,
            },
            operations: vec![ElementOperation {
                operation_type: String::from("modifyElement"),
                data: ElementChange {
                    id: element_ref,
                    operations: vec![
                        TagOperation::SetTags(set_tags),
                        TagOperation::UnsetTags(unset_tags),
                    ],
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CooperativeWork;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_tag_fix_json() {
        let work = CooperativeWork::tag_fix(
            String::from("node/5"),
            BTreeMap::from([(String::from("direction"), String::from("forward"))]),
            vec![],
        );
        let value = serde_json::to_value(&work).expect("serializable");
        let expected = json!({
            "meta": {"version": 2, "type": 1},
            "operations": [{
                "operationType": "modifyElement",
                "data": {
                    "id": "node/5",
                    "operations": [
                        {"operation": "setTags", "data": {"direction": "forward"}},
                        {"operation": "unsetTags", "data": []}
                    ]
                }
            }]
        });
        assert_eq!(value, expected);
    }
}
