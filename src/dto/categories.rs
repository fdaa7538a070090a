use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::category::Category;

/// Category id to display name. Ids serialize as JSON object keys.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id.get(), c.kind.into_inner()))
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}
