use crate::modules::recipes::adapters::outbound::recipe_events_broadcast::RecipeEvents;
use crate::modules::recipes::application::errors::ApplicationError;
use crate::modules::recipes::core::events::RecipeEvent;
use crate::modules::recipes::core::ports::RecipesRepository;
use crate::modules::recipes::core::recipe::Recipe;
use crate::modules::recipes::use_cases::add_recipe::command::AddRecipe;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct AddRecipeHandler {
    repository: Arc<dyn RecipesRepository>,
    events: RecipeEvents,
}

impl AddRecipeHandler {
    pub fn new(repository: Arc<dyn RecipesRepository>, events: RecipeEvents) -> Self {
        Self { repository, events }
    }

    pub async fn handle(&self, command: AddRecipe) -> Result<Recipe, ApplicationError> {
        let recipe = Recipe {
            id: Uuid::now_v7().to_string(),
            title: command.title,
            description: command.description,
            creation_date: Utc::now(),
            ingredients: command.ingredients,
        };

        self.repository.insert(recipe.clone()).await?;

        let subscribers = self.events.publish(RecipeEvent::RecipeAdded(recipe.clone()));
        tracing::debug!(recipe_id = %recipe.id, subscribers, "recipe added");

        Ok(recipe)
    }
}
