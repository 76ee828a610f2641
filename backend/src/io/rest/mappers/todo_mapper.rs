use shared::{CreateTodoRequest, Todo as SharedTodo, UpdateTodoRequest};

use crate::domain::commands::{CreateTodoCommand, UpdateTodoCommand};
use crate::domain::models::todo::{format_timestamp, validate_title, Todo as DomainTodo, TodoValidationError};

/// Mapper between the shared Todo DTOs and domain types.
/// Request conversion is where body validation happens.
pub struct TodoMapper;

impl TodoMapper {
    pub fn to_dto(domain: DomainTodo) -> SharedTodo {
        SharedTodo {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            is_completed: domain.is_completed,
            created_at: format_timestamp(&domain.created_at),
        }
    }

    pub fn to_dto_list(domain_todos: Vec<DomainTodo>) -> Vec<SharedTodo> {
        domain_todos.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(request: CreateTodoRequest) -> Result<CreateTodoCommand, TodoValidationError> {
        Ok(CreateTodoCommand {
            title: validate_title(request.title)?,
            description: request.description,
        })
    }

    pub fn to_update_command(request: UpdateTodoRequest) -> Result<UpdateTodoCommand, TodoValidationError> {
        Ok(UpdateTodoCommand {
            title: validate_title(request.title)?,
            description: request.description,
            is_completed: request.is_completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_to_dto_formats_created_at() {
        let domain = DomainTodo {
            id: 1,
            title: "Buy milk".to_string(),
            description: None,
            is_completed: false,
            created_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        };

        let dto = TodoMapper::to_dto(domain);
        assert_eq!(dto.id, 1);
        assert_eq!(dto.created_at, "2026-10-16T09:30:00.000000Z");
    }

    #[test]
    fn test_create_command_requires_title() {
        let request = CreateTodoRequest {
            title: None,
            description: Some("orphan".to_string()),
        };
        assert_eq!(
            TodoMapper::to_create_command(request),
            Err(TodoValidationError::MissingTitle)
        );
    }

    #[test]
    fn test_update_command_keeps_title_verbatim() {
        let request = UpdateTodoRequest {
            title: Some("  Buy milk ".to_string()),
            description: None,
            is_completed: true,
        };
        let command = TodoMapper::to_update_command(request).unwrap();
        assert_eq!(command.title, "  Buy milk ");
        assert!(command.is_completed);
    }
}
