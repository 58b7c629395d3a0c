//! Custom actions for the Review actor.

#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Shows or hides the review. Hidden reviews leave listings and averages.
    SetApproval(bool),
}
