use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryType};

/// Grouping that every question belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub kind: CategoryType,
}
