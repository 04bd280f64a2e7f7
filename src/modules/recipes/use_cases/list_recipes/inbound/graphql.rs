use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::recipes::adapters::inbound::graphql::GqlRecipe;
use crate::modules::recipes::state::RecipesState;

#[derive(Default)]
pub struct ListRecipesQuery;

#[Object]
impl ListRecipesQuery {
    async fn recipes(
        &self,
        context: &Context<'_>,
        #[graphql(default = 0, validator(minimum = 0))] skip: i32,
        #[graphql(default = 25, validator(minimum = 1, maximum = 50))] take: i32,
    ) -> GqlResult<Vec<GqlRecipe>> {
        let state = context.data_unchecked::<RecipesState>();
        let list = state
            .list_handler
            .handle(skip.max(0) as usize, take.max(0) as usize)
            .await
            .map_err(|e| e.extend())?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
