use async_graphql::{Context, Subscription};
use futures::{Stream, stream};
use tokio::sync::broadcast::error::RecvError;

use crate::modules::recipes::adapters::inbound::graphql::GqlRecipe;
use crate::modules::recipes::core::events::RecipeEvent;
use crate::modules::recipes::state::RecipesState;

#[derive(Default)]
pub struct RecipeAddedSubscription;

#[Subscription]
impl RecipeAddedSubscription {
    async fn recipe_added(&self, context: &Context<'_>) -> impl Stream<Item = GqlRecipe> {
        let receiver = context.data_unchecked::<RecipesState>().events.subscribe();

        stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(RecipeEvent::RecipeAdded(recipe)) => {
                        return Some((GqlRecipe::from(recipe), receiver));
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "recipeAdded subscriber lagged");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
    }
}
