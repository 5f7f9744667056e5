// File: src/session.rs
//! The interpretation loop's state: sole owner of the task list.
//! Every front end feeds lines through [`Session::handle`] so validation,
//! execution and persistence behave the same everywhere.
use crate::command::Response;
use crate::model::{self, TaskList};
use crate::storage::TaskStorage;
use anyhow::Result;

pub struct Session<S: TaskStorage> {
    tasks: TaskList,
    storage: S,
    autosave: bool,
}

impl<S: TaskStorage> Session<S> {
    /// Loads the initial list from `storage`.
    pub fn open(mut storage: S, autosave: bool) -> Result<Self> {
        let tasks = TaskList::from(storage.load()?);
        Ok(Self {
            tasks,
            storage,
            autosave,
        })
    }

    /// Read-only view for presentation and export.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Runs one line of input. Rejected input comes back as a normal
    /// response carrying the error message; the list is left unchanged.
    pub fn handle(&mut self, input: &str) -> Response {
        let command = match model::parse(input) {
            Ok(command) => command,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", input, e);
                return Response::message(e.message());
            }
        };

        let name = command.name();
        let mutating = command.is_mutating();
        let mut response = match command.execute(&mut self.tasks) {
            Ok(response) => response,
            Err(e) => {
                log::debug!("'{}' failed: {}", name, e);
                return Response::message(e.message());
            }
        };
        log::debug!("Executed '{}', list now has {} task(s)", name, self.tasks.len());

        if mutating
            && self.autosave
            && let Err(e) = self.save()
        {
            log::error!("Failed to save tasks: {:#}", e);
            response
                .text
                .push_str(&format!("\nWarning: your tasks could not be saved ({}).", e));
        }
        response
    }

    pub fn save(&mut self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::storage::MemoryStorage;
    use anyhow::anyhow;

    struct BrokenStorage;

    impl TaskStorage for BrokenStorage {
        fn load(&mut self) -> Result<Vec<Task>> {
            Ok(vec![Task::todo("kept")])
        }

        fn save(&mut self, _tasks: &TaskList) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    #[test]
    fn test_save_failure_keeps_session_alive() {
        let mut session = Session::open(BrokenStorage, true).unwrap();
        let response = session.handle("todo another");
        assert!(!response.exit);
        assert!(response.text.contains("could not be saved"));
        assert_eq!(session.tasks().len(), 2);
    }

    #[test]
    fn test_rejected_input_returns_message() {
        let mut session = Session::open(MemoryStorage::default(), true).unwrap();
        let response = session.handle("mark one");
        assert_eq!(
            response.text,
            "Mate, please give a task number (not text) to mark."
        );
        assert!(session.tasks().is_empty());
        assert_eq!(session.storage().saves, 0);
    }

    #[test]
    fn test_autosave_off_skips_storage() {
        let mut session = Session::open(MemoryStorage::default(), false).unwrap();
        session.handle("todo quiet");
        assert_eq!(session.storage().saves, 0);
        session.save().unwrap();
        assert_eq!(session.storage().tasks, vec![Task::todo("quiet")]);
    }
}
