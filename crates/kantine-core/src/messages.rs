//! User-facing notification queue.
//!
//! Mutations push success and failure messages here; the presentation layer
//! drains the queue once per render cycle, so every message is shown exactly
//! once.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Message levels, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Debug,
	Info,
	Success,
	Warning,
	Error,
}

impl Level {
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Debug => "debug",
			Level::Info => "info",
			Level::Success => "success",
			Level::Warning => "warning",
			Level::Error => "error",
		}
	}
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	pub level: Level,
	pub text: String,
}

impl Message {
	pub fn new(level: Level, text: impl Into<String>) -> Self {
		Self {
			level,
			text: text.into(),
		}
	}

	pub fn success(text: impl Into<String>) -> Self {
		Self::new(Level::Success, text)
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self::new(Level::Error, text)
	}
}

/// Drain-on-read message queue shared across a session.
///
/// # Examples
///
/// ```
/// use kantine_core::messages::{Level, MessageStore};
///
/// let store = MessageStore::new();
/// store.success("Kunde opprettet");
///
/// let drained = store.drain();
/// assert_eq!(drained.len(), 1);
/// assert_eq!(drained[0].level, Level::Success);
/// assert!(store.drain().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MessageStore {
	messages: Mutex<VecDeque<Message>>,
}

impl MessageStore {
	pub fn new() -> Self {
		Self {
			messages: Mutex::new(VecDeque::new()),
		}
	}

	pub fn add(&self, message: Message) {
		let mut messages = self.messages.lock().unwrap();
		messages.push_back(message);
	}

	pub fn success(&self, text: impl Into<String>) {
		self.add(Message::success(text));
	}

	pub fn error(&self, text: impl Into<String>) {
		self.add(Message::error(text));
	}

	/// Take every pending message, leaving the queue empty.
	pub fn drain(&self) -> Vec<Message> {
		let mut messages = self.messages.lock().unwrap();
		messages.drain(..).collect()
	}

	/// Look at pending messages without consuming them.
	pub fn peek(&self) -> Vec<Message> {
		let messages = self.messages.lock().unwrap();
		messages.iter().cloned().collect()
	}

	pub fn clear(&self) {
		let mut messages = self.messages.lock().unwrap();
		messages.clear();
	}

	pub fn len(&self) -> usize {
		self.messages.lock().unwrap().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
