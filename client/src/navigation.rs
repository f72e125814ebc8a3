//! Navigation between client pages.
//!
//! The store holds the page currently on display and tells its listeners
//! whenever it changes, so the shell around it only ever renders
//! `current()`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
    Dashboard,
}

type Listener = Box<dyn Fn(Page) + Send>;

pub struct NavigationStore {
    current: Page,
    listeners: Vec<Listener>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self {
            current: Page::Login,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch pages. Listeners only fire on an actual change.
    pub fn navigate(&mut self, page: Page) {
        if self.current == page {
            return;
        }
        self.current = page;
        for listener in &self.listeners {
            listener(page);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Page) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}
