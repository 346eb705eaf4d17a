use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::catalog::model::{self as catalog, TopicContext};
use crate::layout::tidy::{self, Layout};
use crate::manifest::assets::{self, TopicAssets};
use crate::manifest::model::{Manifest, ManifestEntry};
use crate::outline::model::OutlineNode;
use crate::parser::outline;
use crate::tui::input::{self, Action, Direction};
use crate::tui::render::{self, RenderData, Section, StrategyView};
use crate::tui::viewport::{self, Viewport};
use crate::workspace;

/// Cells moved per keyboard pan step.
const PAN_STEP_X: f32 = 4.0;
const PAN_STEP_Y: f32 = 2.0;

/// Captured at pointer-down; pan follows the cumulative pointer delta.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    col: u16,
    row: u16,
    pan_x: f32,
    pan_y: f32,
}

#[derive(Debug)]
struct AppState {
    topic: Option<TopicContext>,
    sample_dir: Option<PathBuf>,
    demo: bool,
    assets: Option<TopicAssets>,
    load_error: Option<String>,
    outline: Option<OutlineNode>,
    layout: Option<Layout>,
    viewport: Viewport,
    needs_fit: bool,
    canvas_rect: Rect,
    section: Section,
    strategy_view: StrategyView,
    scroll: u16,
    drag: Option<DragStart>,
    show_help: bool,
    status_message: Option<String>,
}

impl AppState {
    fn load(
        slugs: Option<(&str, &str, &str)>,
        dir: Option<PathBuf>,
        demo: bool,
    ) -> Result<Self> {
        let topic = match slugs {
            Some((category, work, topic)) => catalog::find_topic(category, work, topic),
            // No slugs: open the first topic in the catalog.
            None => catalog::categories().iter().find_map(|c| {
                let work = c.works.first()?;
                let topic = work.topics.first()?;
                catalog::find_topic(c.slug, work.slug, topic.slug)
            }),
        };

        let mut app = Self {
            topic,
            sample_dir: None,
            demo,
            assets: None,
            load_error: None,
            outline: None,
            layout: None,
            viewport: Viewport::default(),
            needs_fit: true,
            canvas_rect: Rect::ZERO,
            section: Section::Topic,
            strategy_view: StrategyView::MindMap,
            scroll: 0,
            drag: None,
            show_help: false,
            status_message: None,
        };

        if demo {
            app.assets = Some(demo_assets());
            app.status_message = Some("demo mode: built-in sample pack".to_string());
        } else {
            match workspace::resolve_dir(dir) {
                Ok(found) => app.sample_dir = Some(found),
                Err(err) => app.load_error = Some(format!("{err:#}")),
            }
        }
        app.refresh_assets();
        Ok(app)
    }

    /// Re-read the sample pack from disk and rebuild the outline, layout
    /// and fit. On failure, clears loaded assets so stale and failed data
    /// never mix.
    fn refresh_assets(&mut self) {
        if !self.demo
            && let Some(dir) = self.sample_dir.clone()
        {
            match assets::load(&dir) {
                Ok(loaded) => {
                    self.assets = Some(loaded);
                    self.load_error = None;
                }
                Err(err) => {
                    self.assets = None;
                    self.load_error = Some(format!("{err:#}"));
                }
            }
        }
        self.rebuild_strategy();
    }

    /// Parse and lay out the strategy outline. The tree is rebuilt from
    /// scratch on every pack change, never patched.
    fn rebuild_strategy(&mut self) {
        self.outline = self
            .assets
            .as_ref()
            .and_then(|a| a.strategy.as_deref())
            .and_then(outline::parse);
        self.layout = self.outline.as_ref().map(tidy::compute);
        self.needs_fit = true;
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        self.canvas_rect = render::canvas_area(frame.area());
        self.apply_fit_if_needed();

        let data = RenderData {
            section: self.section,
            strategy_view: self.strategy_view,
            topic: self.topic.as_ref(),
            assets: self.assets.as_ref(),
            load_error: self.load_error.as_deref(),
            layout: self.layout.as_ref(),
            viewport: self.viewport,
            scroll: self.scroll,
            message: self.status_message.as_deref(),
            show_help: self.show_help,
        };
        render::draw(frame, &data);
    }

    /// Fit runs once per tree replacement (or explicit command), using the
    /// latest canvas measurement; interaction frames only re-project.
    fn apply_fit_if_needed(&mut self) {
        if !self.needs_fit || self.canvas_rect.width == 0 || self.canvas_rect.height == 0 {
            return;
        }
        if let Some(layout) = &self.layout {
            self.viewport = Viewport::fit_to_bounds(
                self.canvas_rect.width as f32,
                self.canvas_rect.height as f32,
                &layout.bounds,
            );
        } else {
            self.viewport = Viewport::default();
        }
        self.needs_fit = false;
    }

    fn canvas_active(&self) -> bool {
        self.section == Section::Strategy
            && self.strategy_view == StrategyView::MindMap
            && self.layout.is_some()
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match input::action_for_key(key) {
            Action::Quit => return true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Cancel => self.show_help = false,
            Action::NextSection => self.set_section(self.section.next()),
            Action::PrevSection => self.set_section(self.section.prev()),
            Action::JumpSection(idx) => {
                if let Some(section) = Section::ALL.get(idx) {
                    self.set_section(*section);
                }
            }
            Action::Move(direction) => self.handle_move(direction),
            Action::ZoomIn => self.zoom_step(viewport::STEP_FACTOR),
            Action::ZoomOut => self.zoom_step(1.0 / viewport::STEP_FACTOR),
            Action::Fit => {
                self.needs_fit = true;
                self.apply_fit_if_needed();
            }
            Action::Refresh => {
                self.refresh_assets();
                self.status_message = Some(if self.demo {
                    "demo pack rebuilt".to_string()
                } else if self.load_error.is_some() {
                    "reload failed — see the section panel".to_string()
                } else {
                    "sample pack reloaded".to_string()
                });
            }
            Action::ToggleStrategyView => {
                self.strategy_view = self.strategy_view.toggled();
                self.scroll = 0;
            }
            Action::Noop => {}
        }
        false
    }

    fn set_section(&mut self, section: Section) {
        self.section = section;
        self.scroll = 0;
    }

    fn handle_move(&mut self, direction: Direction) {
        if self.canvas_active() {
            let (dx, dy) = match direction {
                Direction::Up => (0.0, PAN_STEP_Y),
                Direction::Down => (0.0, -PAN_STEP_Y),
                Direction::Left => (PAN_STEP_X, 0.0),
                Direction::Right => (-PAN_STEP_X, 0.0),
            };
            self.viewport = self.viewport.pan_by(dx, dy);
            return;
        }
        match direction {
            Direction::Up => self.scroll = self.scroll.saturating_sub(1),
            Direction::Down => self.scroll = self.scroll.saturating_add(1),
            Direction::Left | Direction::Right => {}
        }
    }

    /// Discrete zoom step, anchored at the canvas centre.
    fn zoom_step(&mut self, factor: f32) {
        if !self.canvas_active() {
            return;
        }
        let cx = self.canvas_rect.width as f32 / 2.0;
        let cy = self.canvas_rect.height as f32 / 2.0;
        self.viewport = self.viewport.zoom_around(factor, cx, cy);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        let inside = self.canvas_active() && self.canvas_rect.contains(position);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Idle → Dragging: capture the pointer cell and current pan.
                if inside {
                    self.drag = Some(DragStart {
                        col: mouse.column,
                        row: mouse.row,
                        pan_x: self.viewport.pan_x,
                        pan_y: self.viewport.pan_y,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(start) = self.drag else { return };
                if !self.canvas_rect.contains(position) {
                    // Pointer left the canvas: Dragging → Idle.
                    self.drag = None;
                    return;
                }
                let dx = mouse.column as f32 - start.col as f32;
                let dy = mouse.row as f32 - start.row as f32;
                self.viewport.pan_x = start.pan_x + dx;
                self.viewport.pan_y = start.pan_y + dy;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag = None;
            }
            // Wheel zoom works in both states and leaves the drag alone.
            MouseEventKind::ScrollUp => self.wheel_zoom(viewport::WHEEL_IN, position),
            MouseEventKind::ScrollDown => self.wheel_zoom(viewport::WHEEL_OUT, position),
            _ => {}
        }
    }

    /// Wheel zoom anchored at the cursor cell.
    fn wheel_zoom(&mut self, factor: f32, position: Position) {
        if self.canvas_active() {
            if !self.canvas_rect.contains(position) {
                return;
            }
            let anchor_x = (position.x - self.canvas_rect.x) as f32;
            let anchor_y = (position.y - self.canvas_rect.y) as f32;
            self.viewport = self.viewport.zoom_around(factor, anchor_x, anchor_y);
            return;
        }
        // Non-canvas sections: wheel scrolls.
        if factor < 1.0 {
            self.scroll = self.scroll.saturating_add(1);
        } else {
            self.scroll = self.scroll.saturating_sub(1);
        }
    }
}

pub fn run(slugs: Option<(&str, &str, &str)>, dir: Option<PathBuf>, demo: bool) -> Result<()> {
    let mut app = AppState::load(slugs, dir, demo)?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| app.draw(f))?;
        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if matches!(key.kind, KeyEventKind::Release | KeyEventKind::Repeat) {
                    continue;
                }
                if app.handle_key(key) {
                    break;
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
    }
}

/// Built-in sample pack for `--demo`; touches no disk.
fn demo_assets() -> TopicAssets {
    let strategy = "\
# Green Light Essay Plan
## Establish the symbol
- Introduce the dock light in chapter one
- Connect the light to Gatsby's first appearance
## Trace its meanings
### Hope and longing
- The orgastic future that recedes
### Illusion and loss
- Daisy seen up close diminishes the symbol
## Conclude
- Tie the light to the American Dream's failure
";
    let summary = "\
# Overview
This sample pack walks through a symbol-driven analysis essay.

- One symbol, three readings
- Close reading over plot summary
";
    let faq = "\
FAQ
Q: How many quotes should the essay use?
A: Two or three per body section, each followed by analysis
rather than summary.
Q: Can the conclusion introduce new evidence?
A: No. It should reframe the symbol's arc.
";
    let essay = "\
The Green Light as Gatsby's Horizon
The green light at the end of Daisy's dock is introduced before Daisy herself, and that ordering is the essay's whole argument.
Fitzgerald lets the symbol accumulate meaning faster than the character can sustain it.
References
Fitzgerald, F. Scott. The Great Gatsby. Scribner, 1925.
Bruccoli, Matthew J. New Essays on The Great Gatsby. Cambridge UP, 1985.
";

    let entry = |path: &str, bytes: u64, ext: &str| ManifestEntry {
        path: path.to_string(),
        bytes,
        ext: ext.to_string(),
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
    };
    let manifest = Manifest {
        source: "demo".to_string(),
        generated_at: "2026-08-23T12:00:00.000Z".to_string(),
        files: vec![
            entry("essay.md", essay.len() as u64, ".md"),
            entry("faq.md", faq.len() as u64, ".md"),
            entry("notes/outline-draft.docx", 18_432, ".docx"),
            entry("references/bruccoli-new-essays.pdf", 2_621_440, ".pdf"),
            entry("summary.md", summary.len() as u64, ".md"),
            entry("writing_strategy.md", strategy.len() as u64, ".md"),
        ],
    };

    let mut contents = HashMap::new();
    contents.insert("writing_strategy.md".to_string(), strategy.to_string());
    contents.insert("summary.md".to_string(), summary.to_string());
    contents.insert("faq.md".to_string(), faq.to_string());
    contents.insert("essay.md".to_string(), essay.to_string());

    assets::from_contents(manifest, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn demo_app() -> AppState {
        let mut app = AppState::load(None, None, true).unwrap();
        app.canvas_rect = Rect::new(2, 3, 80, 24);
        app.apply_fit_if_needed();
        app.section = Section::Strategy;
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn demo_pack_builds_a_layout() {
        let app = demo_app();
        assert!(app.assets.is_some());
        let outline = app.outline.as_ref().unwrap();
        assert_eq!(outline.label, "Green Light Essay Plan");
        assert!(app.layout.is_some());
        assert!(!app.needs_fit, "fit should have been applied");
    }

    #[test]
    fn drag_accumulates_from_the_start_pan() {
        let mut app = demo_app();
        let (pan_x, pan_y) = (app.viewport.pan_x, app.viewport.pan_y);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        assert!(app.drag.is_some());

        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 14, 12));
        assert_eq!(app.viewport.pan_x, pan_x + 4.0);
        assert_eq!(app.viewport.pan_y, pan_y + 2.0);

        // Delta is cumulative from drag start, not per-event.
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 11, 10));
        assert_eq!(app.viewport.pan_x, pan_x + 1.0);
        assert_eq!(app.viewport.pan_y, pan_y);
    }

    #[test]
    fn pointer_up_ends_the_drag() {
        let mut app = demo_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 10));
        assert!(app.drag.is_none());
    }

    #[test]
    fn leaving_the_canvas_ends_the_drag() {
        let mut app = demo_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1));
        assert!(app.drag.is_none());
    }

    #[test]
    fn wheel_during_drag_leaves_the_drag_in_place() {
        let mut app = demo_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        app.handle_mouse(mouse(MouseEventKind::ScrollUp, 10, 10));
        assert!(app.drag.is_some());
    }

    #[test]
    fn pointer_down_outside_the_canvas_does_not_start_a_drag() {
        let mut app = demo_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(app.drag.is_none());
    }

    #[test]
    fn wheel_zoom_preserves_the_cursor_anchor() {
        let mut app = demo_app();
        let anchor_x = (20 - app.canvas_rect.x) as f32;
        let anchor_y = (10 - app.canvas_rect.y) as f32;
        let before = app.viewport.to_content(anchor_x, anchor_y);
        app.handle_mouse(mouse(MouseEventKind::ScrollUp, 20, 10));
        let after = app.viewport.to_content(anchor_x, anchor_y);
        assert!((before.0 - after.0).abs() < 1e-3);
        assert!((before.1 - after.1).abs() < 1e-3);
    }

    #[test]
    fn sections_cycle_with_tab() {
        let mut app = demo_app();
        app.section = Section::Topic;
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.section, Section::Strategy);
        app.handle_key(KeyEvent::from(KeyCode::BackTab));
        assert_eq!(app.section, Section::Topic);
    }

    #[test]
    fn digit_jumps_to_the_faq_section() {
        let mut app = demo_app();
        app.handle_key(KeyEvent::from(KeyCode::Char('5')));
        assert_eq!(app.section, Section::Faq);
    }

    #[test]
    fn quit_key_reports_quit() {
        let mut app = demo_app();
        assert!(app.handle_key(KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn toggle_view_switches_and_resets_scroll() {
        let mut app = demo_app();
        app.scroll = 7;
        app.handle_key(KeyEvent::from(KeyCode::Char('v')));
        assert_eq!(app.strategy_view, StrategyView::List);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn arrows_pan_the_canvas_but_scroll_other_sections() {
        let mut app = demo_app();
        let pan_x = app.viewport.pan_x;
        app.handle_key(KeyEvent::from(KeyCode::Right));
        assert_eq!(app.viewport.pan_x, pan_x - PAN_STEP_X);

        app.set_section(Section::Overview);
        app.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.scroll, 1);
        app.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn fit_command_restores_the_fitted_viewport() {
        let mut app = demo_app();
        let fitted = app.viewport;
        app.viewport = app.viewport.pan_by(50.0, 50.0).zoom_around(2.0, 0.0, 0.0);
        app.handle_key(KeyEvent::from(KeyCode::Char('f')));
        assert_eq!(app.viewport, fitted);
    }

    #[test]
    fn refresh_in_demo_mode_keeps_the_pack() {
        let mut app = demo_app();
        app.handle_key(KeyEvent::from(KeyCode::Char('r')));
        assert!(app.assets.is_some());
        assert!(app.layout.is_some());
    }

    #[test]
    fn unknown_slugs_leave_the_placeholder_topic() {
        let app = AppState::load(Some(("nope", "nope", "nope")), None, true).unwrap();
        assert!(app.topic.is_none());
    }

    #[test]
    fn default_topic_is_the_first_catalog_entry() {
        let app = AppState::load(None, None, true).unwrap();
        assert_eq!(
            app.topic.unwrap().topic.slug,
            "symbolism-of-green-light"
        );
    }

    #[test]
    fn missing_sample_dir_becomes_a_load_error_not_a_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = AppState::load(None, Some(dir.path().to_path_buf()), false).unwrap();
        assert!(app.assets.is_none());
        assert!(app.load_error.as_deref().unwrap().contains("otln sync"));
    }

    #[test]
    fn help_toggles_and_escape_closes_it() {
        let mut app = demo_app();
        app.handle_key(KeyEvent::from(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
