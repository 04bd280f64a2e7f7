use crate::modules::recipes::core::recipe::Recipe;
use async_trait::async_trait;

#[async_trait]
pub trait RecipesRepository: Send + Sync {
    async fn find_one_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>>;

    /// Recipes in insertion order, `take` at most, after skipping `skip`.
    async fn find_all(&self, skip: usize, take: usize) -> anyhow::Result<Vec<Recipe>>;

    async fn insert(&self, recipe: Recipe) -> anyhow::Result<()>;

    /// Returns `true` when a recipe with this id existed.
    async fn remove(&self, id: &str) -> anyhow::Result<bool>;
}
