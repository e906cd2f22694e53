//! Project input model.
//!
//! The only data the planner consumes from the outside: the floors of the
//! building and the work-item types (trades) that flow through them.

use serde::{Deserialize, Serialize};

/// A building floor.
///
/// Each floor is split into takt zones when a plan is generated; zone ids
/// are derived from the floor id (`"{id}-A"`, `"{id}-B"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// Unique floor identifier.
    pub id: String,
    /// Floor number (may be negative for basements).
    pub number: i32,
}

/// A work-item type (trade). One crew is planned per work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique work-item identifier.
    pub id: String,
    /// Display name. Also the trade key used for labor-rate lookups.
    pub name: String,
}

/// Read-only project description handed to the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    /// Floors, in building order.
    #[serde(default)]
    pub floors: Vec<Floor>,
    /// Work-item types, in trade sequence order.
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
}

impl Floor {
    /// Creates a floor.
    pub fn new(id: impl Into<String>, number: i32) -> Self {
        Self {
            id: id.into(),
            number,
        }
    }
}

impl WorkItem {
    /// Creates a work item.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl ProjectInput {
    /// Creates an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a floor.
    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.floors.push(floor);
        self
    }

    /// Adds a work-item type.
    pub fn with_work_item(mut self, item: WorkItem) -> Self {
        self.work_items.push(item);
        self
    }

    /// Number of floors.
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Number of work-item types.
    pub fn work_item_count(&self) -> usize {
        self.work_items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let project = ProjectInput::new()
            .with_floor(Floor::new("B1", -1))
            .with_floor(Floor::new("F1", 1))
            .with_work_item(WorkItem::new("W1", "Plaster"));

        assert_eq!(project.floor_count(), 2);
        assert_eq!(project.work_item_count(), 1);
        assert_eq!(project.floors[0].number, -1);
        assert_eq!(project.work_items[0].name, "Plaster");
    }

    #[test]
    fn test_project_deserialize_defaults() {
        let project: ProjectInput =
            serde_json::from_str(r#"{"floors": [{"id": "F1", "number": 1}]}"#).unwrap();
        assert_eq!(project.floor_count(), 1);
        assert!(project.work_items.is_empty());
    }
}
