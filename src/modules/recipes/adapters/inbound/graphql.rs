use async_graphql::{ID, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::recipes::core::recipe::Recipe;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Recipe")]
pub struct GqlRecipe {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub ingredients: Vec<String>,
}

impl From<Recipe> for GqlRecipe {
    fn from(r: Recipe) -> Self {
        Self {
            id: ID(r.id),
            title: r.title,
            description: r.description,
            creation_date: r.creation_date,
            ingredients: r.ingredients,
        }
    }
}
