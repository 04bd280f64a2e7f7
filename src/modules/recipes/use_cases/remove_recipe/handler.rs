use crate::modules::recipes::application::errors::ApplicationError;
use crate::modules::recipes::core::ports::RecipesRepository;
use std::sync::Arc;

pub struct RemoveRecipeHandler {
    repository: Arc<dyn RecipesRepository>,
}

impl RemoveRecipeHandler {
    pub fn new(repository: Arc<dyn RecipesRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: &str) -> Result<bool, ApplicationError> {
        let removed = self.repository.remove(id).await?;
        if removed {
            tracing::debug!(recipe_id = %id, "recipe removed");
        }
        Ok(removed)
    }
}
