//! The running session as a runtime [`Model`].

use tgym_i18n::TextProvider;
use tgym_runtime::Model;

use crate::exercise::{Exercise, Session};
use crate::screen;

/// A selected exercise plus the texts it is shown with.
#[derive(Debug, Clone)]
pub struct Gym<T> {
    session: Session,
    texts: T,
}

impl<T: TextProvider> Gym<T> {
    pub fn new(session: Session, texts: T) -> Self {
        Self { session, texts }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl<T: TextProvider> Model for Gym<T> {
    fn update(&mut self) {
        self.session.update();
    }

    fn view(&self) -> Vec<String> {
        screen::workout(&self.texts, &self.session)
    }

    fn farewell(&self) -> Vec<String> {
        screen::farewell(&self.texts, &self.session)
    }

    fn is_complete(&self) -> bool {
        self.session.is_complete()
    }
}
