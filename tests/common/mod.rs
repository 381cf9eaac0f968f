#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
};

use git_profiles::{AppError, ProfileStore, git::GitConfig, prompt::Prompter};
use tempfile::TempDir;

/// Scripted answer for the next prompt
#[derive(Debug, Clone)]
pub enum Answer {
    Input(Option<String>),
    Select(Option<usize>),
    Confirm(bool),
}

/// Prompter replaying answers in order and recording every question asked
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
    pub offered: RefCell<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str) -> Result<Option<String>, AppError> {
        match self.next(message) {
            Answer::Input(value) => Ok(value),
            other => panic!("expected input answer for {message:?}, got {other:?}"),
        }
    }

    fn select(
        &self,
        message: &str,
        choices: &[String],
        _cancel_label: &str,
    ) -> Result<Option<usize>, AppError> {
        self.offered.borrow_mut().push(choices.to_vec());
        match self.next(message) {
            Answer::Select(index) => Ok(index),
            other => panic!("expected select answer for {message:?}, got {other:?}"),
        }
    }

    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        match self.next(message) {
            Answer::Confirm(answer) => Ok(answer),
            other => panic!("expected confirm answer for {message:?}, got {other:?}"),
        }
    }
}

/// In-memory global Git configuration
#[derive(Default)]
pub struct MemoryGitConfig {
    values: RefCell<HashMap<String, String>>,
    fail_on: Option<String>,
    pub sets: RefCell<Vec<(String, String)>>,
}

impl MemoryGitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set` of `key` fails like an unwritable config file
    pub fn failing_on(key: &str) -> Self {
        Self {
            fail_on: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl GitConfig for MemoryGitConfig {
    fn get(&self, key: &str) -> Result<String, AppError> {
        self.value(key)
            .ok_or_else(|| AppError::GitKeyUnset(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_on.as_deref() == Some(key) {
            return Err(AppError::GitCommand(
                "error: could not lock config file".to_string(),
            ));
        }
        self.sets
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store in a fresh temporary directory; keep the `TempDir` alive for the test
pub fn temp_store() -> (TempDir, ProfileStore) {
    let dir = TempDir::new().unwrap();
    let store = ProfileStore::at(dir.path().join(".git-profiles.json"));
    (dir, store)
}
