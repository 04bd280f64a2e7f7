use crate::modules::recipes::adapters::outbound::recipe_events_broadcast::RecipeEvents;
use crate::modules::recipes::core::ports::RecipesRepository;
use crate::modules::recipes::use_cases::add_recipe::handler::AddRecipeHandler;
use crate::modules::recipes::use_cases::get_recipe::handler::GetRecipeHandler;
use crate::modules::recipes::use_cases::list_recipes::handler::ListRecipesHandler;
use crate::modules::recipes::use_cases::remove_recipe::handler::RemoveRecipeHandler;
use std::sync::Arc;

/// Everything the recipes resolvers reach through the GraphQL context.
#[derive(Clone)]
pub struct RecipesState {
    pub add_handler: Arc<AddRecipeHandler>,
    pub get_handler: Arc<GetRecipeHandler>,
    pub list_handler: Arc<ListRecipesHandler>,
    pub remove_handler: Arc<RemoveRecipeHandler>,
    pub events: RecipeEvents,
}

impl RecipesState {
    pub fn new(repository: Arc<dyn RecipesRepository>, events: RecipeEvents) -> Self {
        Self {
            add_handler: Arc::new(AddRecipeHandler::new(repository.clone(), events.clone())),
            get_handler: Arc::new(GetRecipeHandler::new(repository.clone())),
            list_handler: Arc::new(ListRecipesHandler::new(repository.clone())),
            remove_handler: Arc::new(RemoveRecipeHandler::new(repository)),
            events,
        }
    }
}
