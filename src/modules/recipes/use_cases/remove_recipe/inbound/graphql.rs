use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::recipes::state::RecipesState;

#[derive(Default)]
pub struct RemoveRecipeMutation;

#[Object]
impl RemoveRecipeMutation {
    async fn remove_recipe(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<RecipesState>();
        state
            .remove_handler
            .handle(&id)
            .await
            .map_err(|e| e.extend())
    }
}
