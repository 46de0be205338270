// src/azure/fake.rs
use super::runner::{CommandError, CommandRunner};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Recording runner that replays canned responses in order.
///
/// For every `@path` argument the file contents are captured at call time,
/// so tests can inspect transient files that are deleted afterwards.
pub struct FakeRunner {
    responses: RefCell<VecDeque<Result<String, CommandError>>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
    attached_files: RefCell<Vec<Option<String>>>,
}

impl FakeRunner {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_results(responses.into_iter().map(|s| Ok(s.into())))
    }

    pub fn with_results(responses: impl IntoIterator<Item = Result<String, CommandError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            calls: RefCell::new(Vec::new()),
            attached_files: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::with_results([Err(Self::spawn_error())])
    }

    pub fn spawn_error() -> CommandError {
        CommandError::Spawn {
            program: "az".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "az not found"),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|(_, args)| args.clone()).collect()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn attached_files(&self) -> Vec<Option<String>> {
        self.attached_files.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));

        let attached = args
            .iter()
            .find_map(|a| a.strip_prefix('@'))
            .and_then(|path| std::fs::read_to_string(path).ok());
        self.attached_files.borrow_mut().push(attached);

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected command: {program} {args:?}"))
    }
}
