use crossterm::event::KeyCode;
use model_tester::{FieldKind, FormController};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::ui::{theme::Theme, widgets::error_bar};

use super::Action;

const LABEL_WIDTH: usize = 24;

struct Tab {
    title: &'static str,
    form: Option<FormController>,
    /// Whether the output region currently shows an error.
    failed: bool,
}

pub struct FormState {
    tabs: [Tab; 2],
    active: usize,
    focus: usize,
    notice: Option<String>,
}

impl FormState {
    pub fn new(regression: FormController, classification: Option<FormController>) -> Self {
        Self {
            tabs: [
                Tab {
                    title: "Regression",
                    form: Some(regression),
                    failed: false,
                },
                Tab {
                    title: "Classification",
                    form: classification,
                    failed: false,
                },
            ],
            active: 0,
            focus: 0,
            notice: None,
        }
    }

    fn tab(&self) -> &Tab {
        &self.tabs[self.active]
    }

    fn field_count(&self) -> usize {
        self.tab().form.as_ref().map_or(0, |f| f.fields().len())
    }
}

pub fn handle_key(state: &mut FormState, key: KeyCode) -> Action {
    state.notice = None;

    match key {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => {
            state.active = (state.active + 1) % state.tabs.len();
            state.focus = state.focus.min(state.field_count().saturating_sub(1));
            return Action::None;
        }
        KeyCode::Up => {
            state.focus = state.focus.saturating_sub(1);
            return Action::None;
        }
        KeyCode::Down => {
            state.focus = (state.focus + 1).min(state.field_count().saturating_sub(1));
            return Action::None;
        }
        _ => {}
    }

    let focus = state.focus;
    let tab = &mut state.tabs[state.active];
    let Some(form) = tab.form.as_mut() else {
        if key == KeyCode::Enter {
            let title = tab.title.to_lowercase();
            state.notice = Some(format!("no {title} model configured"));
        }
        return Action::None;
    };

    match key {
        KeyCode::Enter => {
            // The outcome is already in the output region.
            tab.failed = form.run_prediction().is_err();
        }
        KeyCode::Left => cycle(form, focus, -1),
        KeyCode::Right => cycle(form, focus, 1),
        KeyCode::Backspace => {
            if let Some(value) = form.value_mut(focus) {
                value.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(value) = form.value_mut(focus) {
                value.push(c);
            }
        }
        KeyCode::F(2) => form.reset(),
        _ => {}
    }

    Action::None
}

/// Moves a categorical field `step` positions through its table, wrapping
/// around. A value outside the table jumps to the first label.
fn cycle(form: &mut FormController, index: usize, step: isize) {
    let Some(table) = form.fields().get(index).and_then(|f| f.table()).cloned() else {
        return;
    };
    let Some(value) = form.value_mut(index) else {
        return;
    };

    let next = match table.encode(value) {
        Some(i) => (i as isize + step).rem_euclid(table.len() as isize) as usize,
        None => 0,
    };
    value.clone_from(&table.labels()[next]);
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, chunks[0], state);

    match &state.tab().form {
        Some(form) => draw_form(f, chunks[1], form, state.focus, state.tab().failed),
        None => draw_placeholder(f, chunks[1], state.tab().title),
    }

    draw_hint(f, chunks[2]);

    if let Some(notice) = &state.notice {
        error_bar(f, chunks[1], notice);
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, state: &FormState) {
    let titles = state.tabs.iter().map(|t| t.title).collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(state.active)
        .style(Theme::muted())
        .highlight_style(Theme::title())
        .divider(Span::styled("|", Theme::dim()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" AI Model Tester ")
                .title_style(Theme::title()),
        );

    f.render_widget(tabs, area);
}

fn draw_form(f: &mut Frame, area: Rect, form: &FormController, focus: usize, failed: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(5)])
        .split(area);

    let lines = form
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = form.value_at(i).unwrap_or_default();
            let shown = match field.kind {
                FieldKind::Categorical { .. } => format!("◂ {value} ▸"),
                FieldKind::Numeric => value.to_string(),
            };

            let row = |style: ratatui::style::Style| {
                if i == focus {
                    style.patch(Theme::focus())
                } else {
                    style
                }
            };

            let mut spans = vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label), row(Theme::dim())),
                Span::styled(shown, row(Theme::text())),
            ];
            if i == focus {
                spans.push(Span::styled("█", Theme::accent_cyan()));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let fields_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Fields ")
        .title_style(Theme::title());

    let visible = fields_block.inner(chunks[0]).height as usize;
    let offset = focus.saturating_sub(visible.saturating_sub(1));

    f.render_widget(
        Paragraph::new(lines)
            .block(fields_block)
            .scroll((offset as u16, 0)),
        chunks[0],
    );

    let output_style = if failed { Theme::error() } else { Theme::ok() };
    f.render_widget(
        Paragraph::new(form.display().content())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .title(" Output ")
                    .title_style(Theme::title()),
            )
            .style(output_style)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, title: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{title} model will be tested here..."),
            Theme::text(),
        )),
        Line::from(Span::styled(
            format!("add a \"{}\" entry to model-tester.json", title.to_lowercase()),
            Theme::muted(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            ),
        area,
    );
}

fn draw_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Theme::dim()),
        Span::styled(" field   ", Theme::muted()),
        Span::styled("←→", Theme::dim()),
        Span::styled(" option   ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled(" predict   ", Theme::muted()),
        Span::styled("F2", Theme::dim()),
        Span::styled(" defaults   ", Theme::muted()),
        Span::styled("tab", Theme::dim()),
        Span::styled(" switch   ", Theme::muted()),
        Span::styled("esc", Theme::dim()),
        Span::styled(" quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center);

    f.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use model_tester::{phone, FeatureVector, PredictError, Prediction, Predictor};

    use super::*;

    struct FirstFeature;

    impl Predictor for FirstFeature {
        fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
            Ok(Prediction::Value(features.to_vec()[0]))
        }
    }

    fn state() -> FormState {
        let form = FormController::initialize(phone::fields(), Box::new(FirstFeature)).unwrap();
        FormState::new(form, None)
    }

    fn press(s: &mut FormState, keys: &[KeyCode]) {
        for k in keys {
            handle_key(s, *k);
        }
    }

    fn regression(s: &FormState) -> &FormController {
        s.tabs[0].form.as_ref().unwrap()
    }

    #[test]
    fn right_cycles_the_focused_category() {
        let mut s = state();
        press(&mut s, &[KeyCode::Right, KeyCode::Enter]);

        assert_eq!(regression(&s).value("brand"), Some("Infinix"));
        assert_eq!(
            regression(&s).display().content(),
            "The prediction for these values is: 4.0"
        );
        assert!(!s.tabs[0].failed);
    }

    #[test]
    fn left_wraps_around() {
        let mut s = state();
        press(&mut s, &[KeyCode::Down, KeyCode::Left, KeyCode::Left]);

        assert_eq!(regression(&s).value("os"), Some("iOS"));
    }

    #[test]
    fn typing_a_bad_number_shows_an_error() {
        let mut s = state();
        press(
            &mut s,
            &[
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Char('x'),
                KeyCode::Enter,
            ],
        );

        assert_eq!(regression(&s).value("screenSize"), Some("5.7x"));
        assert!(s.tabs[0].failed);
        assert!(regression(&s).display().content().contains("screenSize"));

        press(&mut s, &[KeyCode::Backspace, KeyCode::Enter]);
        assert!(!s.tabs[0].failed);
    }

    #[test]
    fn f2_restores_defaults() {
        let mut s = state();
        press(&mut s, &[KeyCode::Right, KeyCode::Right, KeyCode::F(2)]);

        assert_eq!(regression(&s).value("brand"), Some("Huawei"));
    }

    #[test]
    fn focus_stays_within_the_fields() {
        let mut s = state();
        press(&mut s, &[KeyCode::Up]);
        assert_eq!(s.focus, 0);

        press(&mut s, &[KeyCode::Down; 20]);
        assert_eq!(s.focus, 12);
    }

    #[test]
    fn empty_tab_reports_missing_model() {
        let mut s = state();
        press(&mut s, &[KeyCode::Tab, KeyCode::Enter]);

        assert_eq!(s.active, 1);
        assert_eq!(
            s.notice.as_deref(),
            Some("no classification model configured")
        );
        assert!(matches!(handle_key(&mut s, KeyCode::Esc), Action::Quit));
    }
}
