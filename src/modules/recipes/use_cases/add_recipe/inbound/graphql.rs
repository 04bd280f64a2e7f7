use async_graphql::{
    Context, CustomValidator, ErrorExtensions, InputObject, InputValueError, Object,
    Result as GqlResult,
};

use crate::modules::recipes::adapters::inbound::graphql::GqlRecipe;
use crate::modules::recipes::state::RecipesState;
use crate::modules::recipes::use_cases::add_recipe::command::AddRecipe;
use crate::shell::graphql::RequestContext;

/// Bounds a string by its number of characters, not its UTF-8 length.
pub struct CharLength {
    min: usize,
    max: usize,
}

impl CharLength {
    pub fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl CustomValidator<String> for CharLength {
    fn check(&self, value: &String) -> Result<(), InputValueError<String>> {
        let count = value.chars().count();
        if count < self.min {
            Err(InputValueError::custom(format!(
                "the string has {count} characters, must be at least {}",
                self.min
            )))
        } else if count > self.max {
            Err(InputValueError::custom(format!(
                "the string has {count} characters, must be at most {}",
                self.max
            )))
        } else {
            Ok(())
        }
    }
}

/// Validated before the resolver runs; a violation never reaches the handler.
#[derive(InputObject)]
pub struct NewRecipeInput {
    #[graphql(validator(custom = "CharLength::at_most(30)"))]
    pub title: String,
    #[graphql(validator(custom = "CharLength::between(30, 255)"))]
    pub description: Option<String>,
    #[graphql(validator(max_items = 30))]
    pub ingredients: Vec<String>,
}

impl From<NewRecipeInput> for AddRecipe {
    fn from(input: NewRecipeInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            ingredients: input.ingredients,
        }
    }
}

#[derive(Default)]
pub struct AddRecipeMutation;

#[Object]
impl AddRecipeMutation {
    async fn add_recipe(
        &self,
        context: &Context<'_>,
        new_recipe_data: NewRecipeInput,
    ) -> GqlResult<GqlRecipe> {
        let state = context.data_unchecked::<RecipesState>();
        if let Some(request) = context.data_opt::<RequestContext>() {
            tracing::info!(
                method = %request.method,
                uri = %request.uri,
                request_id = request.header("x-request-id").unwrap_or("-"),
                "addRecipe"
            );
        }

        let recipe = state
            .add_handler
            .handle(new_recipe_data.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(recipe.into())
    }
}
