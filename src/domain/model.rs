use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The single aggregate value this program constructs. All fields are set once
/// at build time; only `updated_at` depends on the wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub duration: Duration,
    pub expired: bool,
    pub linked_list: ListNode,
    pub alive: bool,
    pub hp: bool,
    pub windows: bool,
    pub mac: bool,
    pub iphone: bool,
    pub experience: Experience,
    pub children: bool,
    pub wife: bool,
    pub wifi: bool,
    pub parents: bool,
    pub placement: Placement,
    pub confirmed: Confirmed,
}

/// Self-referential node. The builder embeds one default node and never links
/// or traverses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub next: Option<Box<ListNode>>,
    pub value: i64,
}

/// String-encoded coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub longitude: String,
    pub latitude: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    Positive,
    Negative,
}

/// Marker flag, always set in the built record. No consumer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmed(pub bool);

impl Confirmed {
    pub const TRUE: Confirmed = Confirmed(true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_list_node_has_no_successor() {
        let node = ListNode::default();
        assert!(node.next.is_none());
        assert_eq!(node.value, 0);
    }

    #[test]
    fn experience_serializes_as_variant_name() {
        let json = serde_json::to_value(Experience::Positive).unwrap();
        assert_eq!(json, serde_json::json!("Positive"));
    }

    #[test]
    fn confirmed_constant_is_true() {
        assert!(Confirmed::TRUE.0);
    }
}
