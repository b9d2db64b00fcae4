use serde::{Deserialize, Serialize};

use crate::model::record::Record;

/// Reduced projection of a team record used to populate the team selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOption {
    pub id: String,
    pub name: String,
}

impl TeamOption {
    /// Projects a team record. Records without an id cannot be selected and
    /// yield `None`; a missing name falls back to the id.
    pub fn from_record(record: &Record) -> Option<Self> {
        let id = record.id()?;
        let name = record.text("name").unwrap_or_else(|| id.clone());
        Some(Self { id, name })
    }

    pub fn from_records(records: &[Record]) -> Vec<Self> {
        records.iter().filter_map(Self::from_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skips_records_without_id() {
        let records = vec![
            Record::new(json!({"id": "1", "name": "Team Marvel"})),
            Record::new(json!({"name": "Orphan"})),
            Record::new(json!({"id": 2})),
        ];
        let options = TeamOption::from_records(&records);
        assert_eq!(
            options,
            vec![
                TeamOption { id: "1".into(), name: "Team Marvel".into() },
                TeamOption { id: "2".into(), name: "2".into() },
            ]
        );
    }
}
