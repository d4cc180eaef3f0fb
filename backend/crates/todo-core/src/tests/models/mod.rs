mod role;
mod todo;
