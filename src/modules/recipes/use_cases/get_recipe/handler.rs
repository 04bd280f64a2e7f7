use crate::modules::recipes::application::errors::ApplicationError;
use crate::modules::recipes::core::ports::RecipesRepository;
use crate::modules::recipes::core::recipe::Recipe;
use std::sync::Arc;

pub struct GetRecipeHandler {
    repository: Arc<dyn RecipesRepository>,
}

impl GetRecipeHandler {
    pub fn new(repository: Arc<dyn RecipesRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: &str) -> Result<Recipe, ApplicationError> {
        self.repository
            .find_one_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(id.to_string()))
    }
}
