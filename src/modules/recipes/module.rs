use crate::modules::recipes::adapters::outbound::recipe_events_broadcast::RecipeEvents;
use crate::modules::recipes::adapters::outbound::recipes_in_memory::InMemoryRecipes;
use crate::modules::recipes::core::ports::RecipesRepository;
use crate::modules::recipes::state::RecipesState;
use crate::shell::assembly::FeatureModule;
use crate::shell::graphql::AppSchemaBuilder;
use std::sync::Arc;

/// The recipes feature: queries, mutations and the `recipeAdded` subscription.
pub struct RecipesModule {
    state: RecipesState,
}

impl RecipesModule {
    pub fn new(repository: Arc<dyn RecipesRepository>) -> Self {
        Self {
            state: RecipesState::new(repository, RecipeEvents::default()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecipes::new()))
    }
}

impl FeatureModule for RecipesModule {
    fn name(&self) -> &'static str {
        "recipes"
    }

    fn register(&self, schema: AppSchemaBuilder) -> AppSchemaBuilder {
        schema.data(self.state.clone())
    }
}
