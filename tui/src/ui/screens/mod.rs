pub mod form;
pub mod setup;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Setup(setup::SetupState),
    Form(form::FormState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Setup(s) => setup::draw(f, s),
            Screen::Form(s) => form::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Setup(s) => setup::handle_key(s, key),
            Screen::Form(s) => form::handle_key(s, key),
        }
    }
}
