use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub ingredients: Vec<String>,
}
