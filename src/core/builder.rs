use crate::domain::model::{Confirmed, Experience, ListNode, Placement, Record};
use crate::domain::ports::Source;
use crate::utils::error::{ProfileError, Result};
use chrono::{TimeZone, Utc};
use std::time::Duration;

/// Fills every field of the record with its fixed value. Only `updated_at`
/// comes from the wall clock at the moment of the call.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl Source for RecordBuilder {
    fn build(&self) -> Result<Record> {
        let created_at = Utc
            .with_ymd_and_hms(2007, 11, 10, 12, 0, 0)
            .single()
            .ok_or_else(|| ProfileError::TimestampError {
                message: "2007-11-10 12:00:00 is not a valid UTC timestamp".to_string(),
            })?;

        Ok(Record {
            name: "Ansar".to_string(),
            age: 18,
            created_at,
            updated_at: Utc::now(),
            duration: Duration::from_secs(60 * 60),
            expired: false,
            linked_list: ListNode::default(),
            alive: true,
            hp: false,
            windows: true,
            mac: false,
            iphone: true,
            experience: Experience::Positive,
            children: false,
            wife: false,
            wifi: true,
            parents: true,
            placement: Placement {
                longitude: "123".to_string(),
                latitude: "123".to_string(),
            },
            confirmed: Confirmed::TRUE,
        })
    }
}
