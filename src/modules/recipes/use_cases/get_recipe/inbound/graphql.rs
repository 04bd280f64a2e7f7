use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::recipes::adapters::inbound::graphql::GqlRecipe;
use crate::modules::recipes::state::RecipesState;

#[derive(Default)]
pub struct GetRecipeQuery;

#[Object]
impl GetRecipeQuery {
    async fn recipe(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlRecipe> {
        let state = context.data_unchecked::<RecipesState>();
        let recipe = state
            .get_handler
            .handle(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(recipe.into())
    }
}
