// End-to-end tests: lines in, responses out, tasks persisted between sessions.
use taskmate::context::{AppContext, TestContext};
use taskmate::model::Task;
use taskmate::session::Session;
use taskmate::storage::{LocalStorage, MemoryStorage};

#[test]
fn test_tasks_survive_restart() {
    let ctx = TestContext::new();

    {
        let storage = LocalStorage::from_context(&ctx).unwrap();
        let mut session = Session::open(storage, true).unwrap();
        session.handle("todo buy milk");
        session.handle("event camp /from 01-11-2024 /to 03-11-2024");
        session.handle("mark 2");
        let bye = session.handle("bye");
        assert!(bye.exit);
        assert_eq!(bye.text, "Bye mate, see you around.");
    }

    let storage = LocalStorage::from_context(&ctx).unwrap();
    let mut session = Session::open(storage, true).unwrap();
    assert_eq!(session.tasks().len(), 2);
    assert!(session.tasks().tasks()[1].is_done());

    let listing = session.handle("list");
    assert_eq!(
        listing.text,
        "Here are the tasks in your list:\n\
         1. [T][ ] buy milk\n\
         2. [E][X] camp (from: 01-11-2024 to: 03-11-2024)"
    );
}

#[test]
fn test_only_mutating_commands_save() {
    let mut session = Session::open(MemoryStorage::default(), true).unwrap();
    session.handle("list");
    session.handle("find x");
    session.handle("mark 1");
    assert_eq!(session.storage().saves, 0);

    session.handle("todo one");
    session.handle("todo two");
    session.handle("sort description");
    session.handle("delete 2");
    assert_eq!(session.storage().saves, 4);
    assert_eq!(session.storage().tasks, vec![Task::todo("one")]);
}

#[test]
fn test_errors_do_not_end_session() {
    let mut session = Session::open(MemoryStorage::default(), true).unwrap();
    for input in ["blah", "todo", "delete 1", "sort size"] {
        let response = session.handle(input);
        assert!(!response.exit, "{} ended the session", input);
    }
    assert!(session.handle("list").text.starts_with("Here are the tasks"));
}

#[test]
fn test_unreadable_file_is_not_overwritten() {
    let ctx = TestContext::new();
    let path = ctx.get_tasks_path().unwrap();
    std::fs::write(&path, "definitely not json").unwrap();

    let storage = LocalStorage::from_context(&ctx).unwrap();
    assert!(Session::open(storage, true).is_err());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "definitely not json"
    );
}
