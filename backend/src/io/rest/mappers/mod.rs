pub mod todo_mapper;
