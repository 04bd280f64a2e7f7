// In memory implementation of the RecipesRepository port.
//
// Purpose
// - Back the recipes module for local development and tests without a database.
//
// Responsibilities
// - Keep recipes in insertion order.
// - Reject duplicate ids.

use crate::modules::recipes::core::ports::RecipesRepository;
use crate::modules::recipes::core::recipe::Recipe;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryRecipes {
    rows: Mutex<Vec<Recipe>>,
    is_offline: bool,
}

impl InMemoryRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Recipes repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl RecipesRepository for InMemoryRecipes {
    async fn find_one_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        self.ensure_online()?;
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self, skip: usize, take: usize) -> anyhow::Result<Vec<Recipe>> {
        self.ensure_online()?;
        let rows = self.rows.lock().await;
        Ok(rows.iter().skip(skip).take(take).cloned().collect())
    }

    async fn insert(&self, recipe: Recipe) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|r| r.id == recipe.id) {
            anyhow::bail!("recipe {} already exists", recipe.id);
        }
        rows.push(recipe);
        Ok(())
    }

    async fn remove(&self, id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}
