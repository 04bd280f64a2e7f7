use crate::modules::recipes::application::errors::ApplicationError;
use crate::modules::recipes::core::ports::RecipesRepository;
use crate::modules::recipes::core::recipe::Recipe;
use std::sync::Arc;

pub struct ListRecipesHandler {
    repository: Arc<dyn RecipesRepository>,
}

impl ListRecipesHandler {
    pub fn new(repository: Arc<dyn RecipesRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, skip: usize, take: usize) -> Result<Vec<Recipe>, ApplicationError> {
        Ok(self.repository.find_all(skip, take).await?)
    }
}
