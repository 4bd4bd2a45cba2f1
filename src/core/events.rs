use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records a committed change to the catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Added, metadata, json))
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Updated, metadata, json))
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Deleted, metadata, json))
    }

    fn build(name: &str, group: &str, key: &str, kind: DomainEventType, metadata: &HashMap<String, String>, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: json,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::books::domain::model::{BookEntity, Category};
    use crate::core::events::{DomainEvent, DomainEventType};

    fn metadata() -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), "test".to_string())])
    }

    #[tokio::test]
    async fn test_should_build_added() {
        let book = BookEntity::new("B1", "isbn", "title", "author", "1st", "Penguin", Category::Fiction);
        let event = DomainEvent::added("books", "catalog", "B1", &metadata(), &book).expect("build event");
        assert_eq!("books", event.name.as_str());
        assert_eq!("B1", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(Some(&"test".to_string()), event.metadata.get("branch_id"));
        let decoded: BookEntity = serde_json::from_str(event.json_data.as_str()).expect("decode book");
        assert_eq!(book, decoded);
    }

    #[tokio::test]
    async fn test_should_build_updated() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::updated("books", "catalog", "key", &metadata(), &data).expect("build event");
        assert_eq!("key", event.key.as_str());
        assert_eq!(DomainEventType::Updated, event.kind);
    }

    #[tokio::test]
    async fn test_should_build_deleted() {
        let event = DomainEvent::deleted("books", "catalog", "B1", &metadata(), &"B1".to_string()).expect("build event");
        assert_eq!(DomainEventType::Deleted, event.kind);
        assert_eq!("\"B1\"", event.json_data.as_str());
    }

    #[tokio::test]
    async fn test_should_assign_unique_event_ids() {
        let first = DomainEvent::deleted("books", "catalog", "B1", &metadata(), &1).expect("build event");
        let second = DomainEvent::deleted("books", "catalog", "B1", &metadata(), &1).expect("build event");
        assert_ne!(first.event_id, second.event_id);
    }
}
