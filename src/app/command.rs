use crate::domain::models::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScheduleSearch(String),
    CancelSearch,
    FetchSuggestions(String),
    LoadProduct(ProductId),
}
