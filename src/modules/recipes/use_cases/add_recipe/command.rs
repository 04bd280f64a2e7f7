#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRecipe {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
}
