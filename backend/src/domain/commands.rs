//! Validated inputs to [`TodoService`](crate::domain::TodoService).

use crate::domain::models::todo::TodoChanges;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTodoCommand {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

impl From<UpdateTodoCommand> for TodoChanges {
    fn from(command: UpdateTodoCommand) -> Self {
        Self {
            title: command.title,
            description: command.description,
            is_completed: command.is_completed,
        }
    }
}
