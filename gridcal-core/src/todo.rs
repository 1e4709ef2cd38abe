//! To-do items with priorities and due-date badges.
//!
//! The to-do list is view-local: no store table backs it yet, so a list
//! lives only as long as the session that created it.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub priority: Priority,
    pub due: Option<NaiveDate>,
    pub done: bool,
}

/// Due-date proximity relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBadge {
    Overdue,
    DueToday,
    DueSoon,
    Later,
}

impl DueBadge {
    /// Days ahead still considered "due soon".
    const SOON_DAYS: i64 = 3;

    pub fn for_due_date(due: NaiveDate, today: NaiveDate) -> Self {
        match (due - today).num_days() {
            d if d < 0 => DueBadge::Overdue,
            0 => DueBadge::DueToday,
            d if d <= Self::SOON_DAYS => DueBadge::DueSoon,
            _ => DueBadge::Later,
        }
    }
}

impl TodoItem {
    pub fn badge(&self, today: NaiveDate) -> Option<DueBadge> {
        self.due.map(|due| DueBadge::for_due_date(due, today))
    }
}

/// An ordered to-do list. Order is user-controlled (drag-reorder in the
/// original surface), so items keep their position rather than sorting.
#[derive(Debug)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: i64,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Append an item and return its id.
    pub fn add(&mut self, title: impl Into<String>, priority: Priority, due: Option<NaiveDate>) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            title: title.into(),
            priority,
            due,
            done: false,
        });
        id
    }

    /// Flip an item's done flag. Returns false if the id is unknown.
    pub fn toggle_done(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        }
    }

    /// Remove an item by id. Returns false if the id is unknown.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Move the item at `from` so it lands at `to`, shifting the items in
    /// between. Out-of-range positions leave the list untouched.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }
}

impl Default for TodoList {
    fn default() -> Self {
        TodoList::new()
    }
}
