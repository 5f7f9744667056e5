// File: ./src/model/list.rs
use crate::error::{InputError, InputResult};
use crate::model::item::Task;
use std::cmp::Ordering;
use strum::{Display, EnumIter, EnumString};

/// What `sort` orders the list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SortCategory {
    Description,
    Deadline,
}

/// Ordered collection of tasks. Zero-based internally; callers translate
/// to the user's one-based numbering at the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, index: usize) -> InputResult<Task> {
        self.check_bounds(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Sets the done flag. Setting it to its current value is not an error.
    pub fn set_done(&mut self, index: usize, done: bool) -> InputResult<&Task> {
        self.check_bounds(index)?;
        let task = &mut self.tasks[index];
        task.set_done(done);
        Ok(task)
    }

    /// Tasks containing `query`, paired with their zero-based position.
    pub fn find(&self, query: &str) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matches(query))
            .collect()
    }

    /// Stable in-place sort.
    pub fn sort_by(&mut self, category: SortCategory) {
        match category {
            SortCategory::Description => self
                .tasks
                .sort_by(|a, b| a.description().cmp(b.description())),
            SortCategory::Deadline => self.tasks.sort_by(compare_dates),
        }
    }

    fn check_bounds(&self, index: usize) -> InputResult<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(InputError::out_of_range(index, self.tasks.len()))
        }
    }
}

// Undated tasks sink below every dated one.
fn compare_dates(a: &Task, b: &Task) -> Ordering {
    match (a.date(), b.date()) {
        (Some(d1), Some(d2)) => d1.cmp(&d2),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
