use crossterm::event::KeyCode;
use model_tester::{load_model, phone, FormController, FormError};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::AppConfig;
use crate::ui::{
    theme::Theme,
    widgets::{centered_rect, render_hints},
};

use super::{form::FormState, Action, Screen};

const EXAMPLE_MODEL: &str = concat!(
    "{\n",
    "  \"kind\": \"linear_regression\",\n",
    "  \"coefficients\": [\n",
    "    0.01, 0.02, 0.31, 0.0, 0.0, 0.004, 0.01,\n",
    "    0.002, 0.05, 0.0001, 0.0008, 0.02, -0.0003\n",
    "  ],\n",
    "  \"intercept\": -36.4\n",
    "}\n",
    "\n",
    "one coefficient per field, in form order:\n",
    "  brand, os, screenSize, fourG, fiveG, rearCamera,\n",
    "  frontCamera, internalMemory, ram, battery, weight,\n",
    "  releaseYear, daysUsed\n",
    "\n",
    "kind values: linear_regression, linear_classifier\n",
    "linear_classifier keys: labels, coefficients (one row\n",
    "  per label), intercepts",
);

#[derive(Debug, Clone, PartialEq)]
enum Step {
    ModelPath,
    ExampleModel,
    /// The model or the form could not be set up; the form stays closed.
    Fatal { reason: String },
}

pub struct SetupState {
    step: Step,
    model_path: String,
    config: AppConfig,
}

impl SetupState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            step: Step::ModelPath,
            model_path: String::new(),
            config,
        }
    }

    fn default_path(&self) -> String {
        self.config
            .catalog
            .path(&self.config.regression)
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

pub fn handle_key(state: &mut SetupState, key: KeyCode) -> Action {
    match state.step.clone() {
        Step::ModelPath => handle_model_path(state, key),
        Step::ExampleModel => {
            state.step = Step::ModelPath;
            Action::None
        }
        Step::Fatal { .. } => match key {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => {
                state.step = Step::ModelPath;
                Action::None
            }
        },
    }
}

fn handle_model_path(state: &mut SetupState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('?') if state.model_path.is_empty() => {
            state.step = Step::ExampleModel;
            Action::None
        }
        KeyCode::Char(c) => {
            state.model_path.push(c);
            Action::None
        }
        KeyCode::Backspace => {
            state.model_path.pop();
            Action::None
        }
        KeyCode::Enter => try_open(state),
        KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn try_open(state: &mut SetupState) -> Action {
    match open_forms(&state.config, state.model_path.trim()) {
        Ok(form) => Action::Transition(Screen::Form(form)),
        Err(e) => {
            log::error!("{e}");
            state.step = Step::Fatal {
                reason: e.to_string(),
            };
            Action::None
        }
    }
}

/// Loads the configured models and binds them to phone forms.
///
/// An empty `typed_path` uses the catalog entry of the regression model.
///
/// # Errors
/// Returns the first `ModelLoad` or `Configuration` error met.
fn open_forms(config: &AppConfig, typed_path: &str) -> Result<FormState, FormError> {
    let model = if typed_path.is_empty() {
        config.catalog.load(&config.regression)?
    } else {
        load_model(typed_path)?
    };
    let regression = FormController::initialize(phone::fields(), model)?;

    let classification = match &config.classification {
        Some(name) => {
            let model = config.catalog.load(name)?;
            Some(FormController::initialize(phone::fields(), model)?)
        }
        None => None,
    };

    Ok(FormState::new(regression, classification))
}

pub fn draw(f: &mut Frame, state: &SetupState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    match &state.step {
        Step::ModelPath => draw_path_input(f, area, &state.model_path, &state.default_path()),
        Step::ExampleModel => draw_example(f, area),
        Step::Fatal { reason } => draw_fatal(f, area, reason),
    }
}

fn draw_fatal(f: &mut Frame, area: Rect, reason: &str) {
    let outer = centered_rect(60, 60, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Cannot Open Form",
            Theme::error().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Fix the model artifact or model-tester.json and try again.",
            Theme::muted(),
        )),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(reason)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::error())
                    .title(" Reason ")
                    .title_style(Theme::error()),
            )
            .style(Theme::text())
            .wrap(Wrap { trim: true }),
        chunks[3],
    );

    render_hints(
        f,
        chunks[5],
        &[("any key", "choose another model"), ("q / esc", "quit")],
    );
}

fn draw_path_input(f: &mut Frame, area: Rect, current: &str, default: &str) {
    let outer = centered_rect(55, 70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(2),
            Constraint::Length(3), // input box
            Constraint::Length(1),
            Constraint::Length(1), // default note
            Constraint::Min(0),
            Constraint::Length(4), // keybinds
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "AI Model Tester",
            Theme::title().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled("Choose the regression model", Theme::dim())),
        chunks[1],
    );

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" model artifact path ")
        .title_style(Theme::title());

    let inner = input_block.inner(chunks[3]);
    f.render_widget(input_block, chunks[3]);

    let display = if current.is_empty() {
        Line::from(vec![
            Span::styled(default, Theme::muted()),
            Span::styled("█", Theme::accent_cyan()),
        ])
    } else {
        Line::from(vec![
            Span::styled(current, Theme::ok()),
            Span::styled("█", Theme::accent_cyan()),
        ])
    };

    f.render_widget(Paragraph::new(display), inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("leave empty to use {default}"),
            Theme::dim(),
        )),
        chunks[5],
    );

    render_hints(
        f,
        chunks[7],
        &[("enter", "open form"), ("?", "view example"), ("esc", "quit")],
    );
}

fn draw_example(f: &mut Frame, area: Rect) {
    let outer = centered_rect(65, 88, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "model artifact - example",
            Theme::title().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(EXAMPLE_MODEL)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .style(Theme::dim())
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    render_hints(f, chunks[2], &[("any key", "back")]);
}
