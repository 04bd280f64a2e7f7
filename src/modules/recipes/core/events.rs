use crate::modules::recipes::core::recipe::Recipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeEvent {
    RecipeAdded(Recipe),
}
