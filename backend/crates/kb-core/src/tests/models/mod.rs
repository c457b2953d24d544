mod project;
mod task;
mod task_priority;
