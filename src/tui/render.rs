//! Pure scene drawing for the topic viewer.
//!
//! `draw` is a function of the render data and the frame alone; it owns
//! no state. The mind-map canvas plots cubic edge connectors into the
//! cell buffer, then node boxes with their wrapped labels on top.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout as RLayout, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::catalog::model::TopicContext;
use crate::layout::tidy::{Layout, NodeBox};
use crate::manifest::assets::TopicAssets;
use crate::manifest::model::{self, ManifestEntry};
use crate::tui::viewport::Viewport;

/// Horizontal offset floor for edge control points, in content units.
const EDGE_MIN_CONTROL: f32 = 60.0;
/// Samples per edge curve.
const EDGE_SAMPLES: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Topic,
    Strategy,
    Overview,
    Body,
    Faq,
    References,
    Attachments,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Topic,
        Section::Strategy,
        Section::Overview,
        Section::Body,
        Section::Faq,
        Section::References,
        Section::Attachments,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Topic => "Topic",
            Section::Strategy => "Strategy",
            Section::Overview => "Overview",
            Section::Body => "Body",
            Section::Faq => "FAQ",
            Section::References => "References",
            Section::Attachments => "Attachments",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How the Strategy section renders `writing_strategy.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyView {
    MindMap,
    List,
}

impl StrategyView {
    pub fn toggled(self) -> Self {
        match self {
            Self::MindMap => Self::List,
            Self::List => Self::MindMap,
        }
    }
}

#[derive(Debug)]
pub struct RenderData<'a> {
    pub section: Section,
    pub strategy_view: StrategyView,
    pub topic: Option<&'a TopicContext>,
    pub assets: Option<&'a TopicAssets>,
    pub load_error: Option<&'a str>,
    pub layout: Option<&'a Layout>,
    pub viewport: Viewport,
    pub scroll: u16,
    pub message: Option<&'a str>,
    pub show_help: bool,
}

pub fn draw(frame: &mut Frame, data: &RenderData<'_>) {
    let (outer, tabs_area, content, status_area) = chrome_areas(frame.area());

    let title = Line::from(vec![
        Span::styled("otln view", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled("[?] help", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("[q] quit", Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    frame.render_widget(block, outer);

    draw_tabs(frame, tabs_area, data.section);

    match data.section {
        Section::Topic => draw_topic(frame, content, data),
        Section::Strategy => draw_strategy(frame, content, data),
        Section::Overview => draw_overview(frame, content, data),
        Section::Body => draw_body(frame, content, data),
        Section::Faq => draw_faq(frame, content, data),
        Section::References => draw_references(frame, content, data),
        Section::Attachments => draw_attachments(frame, content, data),
    }

    draw_status(frame, status_area, data);

    if data.show_help {
        draw_help(frame, frame.area());
    }
}

/// The cell area the Strategy mind-map canvas occupies, derived from the
/// frame area alone so the app can measure it for fit and hit-testing.
pub fn canvas_area(frame_area: Rect) -> Rect {
    let (_, _, content, _) = chrome_areas(frame_area);
    // First content row is the strategy header line.
    Rect {
        x: content.x,
        y: content.y.saturating_add(1),
        width: content.width,
        height: content.height.saturating_sub(1),
    }
}

fn chrome_areas(frame_area: Rect) -> (Rect, Rect, Rect, Rect) {
    let outer = frame_area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    let inner = Block::default().borders(Borders::ALL).inner(outer);
    let [tabs, _gap, content, status] = RLayout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(2),
    ])
    .areas(inner);
    (outer, tabs, content, status)
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: Section) {
    let mut spans = Vec::new();
    for (idx, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("[{}] {}", idx + 1, section.title()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_topic(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    let Some(ctx) = data.topic else {
        draw_placeholder(frame, area, "Topic not found");
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            ctx.topic.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            ctx.breadcrumb(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", ctx.topic.excerpt),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Keywords: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(ctx.topic.keywords.join(", ")),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Analysis focus",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "This essay explores the intersection of {} within {}. It examines how {} uses these elements to reinforce the primary themes of the work.",
            ctx.topic.keywords.join(", "),
            ctx.work.title,
            ctx.work.author,
        )),
        Line::from(""),
    ];

    let related = ctx.related_topics();
    if !related.is_empty() {
        lines.push(Line::from(Span::styled(
            "Related topics",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for topic in related {
            lines.push(Line::from(format!("  • {}  ({})", topic.title, topic.slug)));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((data.scroll, 0)),
        area,
    );
}

fn draw_strategy(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    if let Some(error) = data.load_error {
        draw_error(frame, area, error);
        return;
    }

    let strategy = data.assets.and_then(|a| a.strategy.as_deref());
    let synced = data
        .assets
        .map(|a| a.manifest.generated_at.as_str())
        .unwrap_or("");
    let header = match data.strategy_view {
        StrategyView::MindMap => format!(
            "mind map · [v] list · drag to pan, wheel to zoom, [f] fit · synced {synced}"
        ),
        StrategyView::List => format!("list · [v] mind map · synced {synced}"),
    };
    let [header_area, body_area] =
        RLayout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(header, Style::default().fg(Color::DarkGray))),
        header_area,
    );

    let Some(text) = strategy else {
        draw_placeholder(frame, body_area, "writing_strategy.md not found in the sample pack");
        return;
    };

    match data.strategy_view {
        StrategyView::MindMap => match data.layout {
            Some(layout) => draw_mindmap(frame, body_area, layout, data.viewport),
            None => draw_placeholder(
                frame,
                body_area,
                "writing_strategy.md is empty — nothing to map",
            ),
        },
        StrategyView::List => {
            frame.render_widget(
                Paragraph::new(markdown_lines(text))
                    .wrap(Wrap { trim: true })
                    .scroll((data.scroll, 0)),
                body_area,
            );
        }
    }
}

fn draw_overview(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    if let Some(error) = data.load_error {
        draw_error(frame, area, error);
        return;
    }
    match data.assets.and_then(|a| a.overview.as_deref()) {
        Some(text) => frame.render_widget(
            Paragraph::new(markdown_lines(text))
                .wrap(Wrap { trim: true })
                .scroll((data.scroll, 0)),
            area,
        ),
        None => draw_placeholder(frame, area, "summary.md not found in the sample pack"),
    }
}

fn draw_body(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    if let Some(error) = data.load_error {
        draw_error(frame, area, error);
        return;
    }
    let Some(article) = data.assets.and_then(|a| a.article.as_ref()) else {
        draw_placeholder(frame, area, "no main-body markdown in the sample pack");
        return;
    };

    let mut lines = Vec::new();
    if let Some(title) = &article.title {
        lines.push(
            Line::from(Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        lines.push(Line::from(""));
    }
    for paragraph in article.paragraphs() {
        if Some(paragraph) == article.title.as_deref() {
            continue;
        }
        lines.push(Line::from(format!("    {paragraph}")));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((data.scroll, 0)),
        area,
    );
}

fn draw_faq(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    if let Some(error) = data.load_error {
        draw_error(frame, area, error);
        return;
    }
    let items = data.assets.map(|a| a.faq.as_slice()).unwrap_or(&[]);
    if items.is_empty() {
        draw_placeholder(frame, area, "no FAQ entries (expected Q:/A: lines)");
        return;
    }
    let mut lines = Vec::new();
    for item in items {
        lines.push(Line::from(Span::styled(
            format!("Q: {}", item.question),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("A: {}", item.answer)));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((data.scroll, 0)),
        area,
    );
}

fn draw_references(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    if let Some(error) = data.load_error {
        draw_error(frame, area, error);
        return;
    }
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Citations",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let refs = data
        .assets
        .and_then(|a| a.article.as_ref())
        .map(|a| a.references.as_slice())
        .unwrap_or(&[]);
    if refs.is_empty() {
        lines.push(Line::from(Span::styled(
            "  the body has no References section",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for entry in refs {
            lines.push(Line::from(format!("  • {entry}")));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Reference PDFs",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let pdfs = data
        .assets
        .map(|a| a.manifest.reference_pdfs())
        .unwrap_or_default();
    if pdfs.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no PDFs under references/",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for file in pdfs {
            lines.push(file_line(file));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((data.scroll, 0)),
        area,
    );
}

fn draw_attachments(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    if let Some(error) = data.load_error {
        draw_error(frame, area, error);
        return;
    }
    let docs = data
        .assets
        .map(|a| a.manifest.doc_attachments())
        .unwrap_or_default();
    if docs.is_empty() {
        draw_placeholder(frame, area, "no doc/docx attachments in the sample pack");
        return;
    }
    let lines: Vec<Line> = docs.iter().map(|f| file_line(f)).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((data.scroll, 0)),
        area,
    );
}

fn file_line(file: &ManifestEntry) -> Line<'static> {
    let size = model::format_bytes(file.bytes);
    let mut spans = vec![
        Span::styled(
            format!("  [{}] ", model::file_type_label(&file.ext)),
            Style::default().fg(Color::Blue),
        ),
        Span::raw(file.name.clone()),
        Span::styled(
            format!("  {}", file.path),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if !size.is_empty() {
        spans.push(Span::styled(
            format!("  ({size})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// The list rendering of outline-style markdown: styled headings, `•`
/// bullets, plain paragraphs.
fn markdown_lines(raw: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            lines.push(Line::from(""));
        } else if let Some(rest) = line.strip_prefix("# ") {
            lines.push(Line::from(Span::styled(
                rest.to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )));
        } else if let Some(rest) = line.strip_prefix("## ") {
            lines.push(Line::from(Span::styled(
                rest.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else if let Some(rest) = line.strip_prefix("### ") {
            lines.push(Line::from(Span::styled(
                format!("  {rest}"),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else if let Some(rest) = line.strip_prefix("- ") {
            lines.push(Line::from(format!("  • {rest}")));
        } else {
            lines.push(Line::from(line.to_string()));
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Mind-map canvas
// ---------------------------------------------------------------------------

fn draw_mindmap(frame: &mut Frame, area: Rect, layout: &Layout, viewport: Viewport) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();

    for &(from, to) in &layout.edges {
        let (Some(source), Some(target)) = (layout.boxes.get(&from), layout.boxes.get(&to)) else {
            continue;
        };
        draw_edge(buf, area, source, target, viewport);
    }

    for &(id, _) in &layout.nodes {
        if let Some(node) = layout.boxes.get(&id) {
            draw_node(buf, area, node, viewport);
        }
    }
}

/// Cubic connector from the source box's right-centre to the target's
/// left-centre, sampled into the cell buffer.
fn draw_edge(buf: &mut Buffer, area: Rect, source: &NodeBox, target: &NodeBox, viewport: Viewport) {
    let x1 = source.x + source.w;
    let y1 = source.center_y();
    let x2 = target.x;
    let y2 = target.center_y();
    let dx = ((x2 - x1) * 0.5).max(EDGE_MIN_CONTROL);

    for step in 0..=EDGE_SAMPLES {
        let t = step as f32 / EDGE_SAMPLES as f32;
        let (cx, cy) = cubic_point((x1, y1), (x1 + dx, y1), (x2 - dx, y2), (x2, y2), t);
        let (sx, sy) = viewport.to_screen(cx, cy);
        plot(buf, area, sx, sy, '·', Style::default().fg(Color::DarkGray));
    }
}

fn cubic_point(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

fn plot(buf: &mut Buffer, area: Rect, sx: f32, sy: f32, ch: char, style: Style) {
    let col = area.x as f32 + sx;
    let row = area.y as f32 + sy;
    if col < area.x as f32 || row < area.y as f32 {
        return;
    }
    let position = Position::new(col as u16, row as u16);
    if !area.contains(position) {
        return;
    }
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

/// Rounded box with wrapped label lines, clipped to the canvas area.
/// The root gets the distinct treatment.
fn draw_node(buf: &mut Buffer, area: Rect, node: &NodeBox, viewport: Viewport) {
    let (sx0, sy0) = viewport.to_screen(node.x, node.y);
    let (sx1, sy1) = viewport.to_screen(node.x + node.w, node.y + node.h);
    let left = (area.x as f32 + sx0).round() as i32;
    let top = (area.y as f32 + sy0).round() as i32;
    let right = ((area.x as f32 + sx1).round() as i32).max(left + 2);
    let bottom = ((area.y as f32 + sy1).round() as i32).max(top + 2);

    let is_root = node.depth == 0;
    let border_style = if is_root {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let text_style = if is_root {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    for row in top..=bottom {
        for col in left..=right {
            let on_top = row == top;
            let on_bottom = row == bottom;
            let on_left = col == left;
            let on_right = col == right;
            let ch = match (on_top, on_bottom, on_left, on_right) {
                (true, _, true, _) => '╭',
                (true, _, _, true) => '╮',
                (_, true, true, _) => '╰',
                (_, true, _, true) => '╯',
                (true, ..) | (_, true, ..) => '─',
                (_, _, true, _) | (_, _, _, true) => '│',
                _ => ' ',
            };
            let style = if ch == ' ' {
                Style::default()
            } else {
                border_style
            };
            put(buf, area, col, row, ch, style);
        }
    }

    // Interior text rows; draw only the wrapped lines that fit.
    let inner_width = (right - left - 3).max(0) as usize;
    if inner_width == 0 {
        return;
    }
    for (idx, line) in node.lines.iter().enumerate() {
        let row = top + 1 + idx as i32;
        if row >= bottom {
            break;
        }
        let text = truncate_text(line, inner_width);
        for (offset, ch) in text.chars().enumerate() {
            put(buf, area, left + 2 + offset as i32, row, ch, text_style);
        }
    }
}

fn put(buf: &mut Buffer, area: Rect, col: i32, row: i32, ch: char, style: Style) {
    if col < 0 || row < 0 {
        return;
    }
    let position = Position::new(col as u16, row as u16);
    if !area.contains(position) {
        return;
    }
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

pub fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_status(frame: &mut Frame, area: Rect, data: &RenderData<'_>) {
    let message = data.message.unwrap_or("");
    let hints = "[Tab] section  [r] refresh  [v] view  [f] fit  [+/-] zoom  [?] help  [q] quit";
    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))).centered(),
        area,
    );
}

fn draw_error(frame: &mut Frame, area: Rect, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title("sample pack unavailable");
    frame.render_widget(
        Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_help(frame: &mut Frame, frame_area: Rect) {
    let area = centered_rect(frame_area, 52, 60);
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Tab / Shift-Tab   next / previous section"),
        Line::from("  1-7               jump to section"),
        Line::from("  arrows / hjkl     pan canvas, scroll sections"),
        Line::from("  drag              pan the mind map"),
        Line::from("  wheel             zoom around the cursor"),
        Line::from("  + / -             zoom around the centre"),
        Line::from("  f                 fit the mind map to the view"),
        Line::from("  v                 toggle mind map / list"),
        Line::from("  r                 reload the sample pack"),
        Line::from("  ?                 toggle this help"),
        Line::from("  q                 quit"),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let vertical = RLayout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(area);
    RLayout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .flex(Flex::Center)
    .split(vertical[1])[1]
}
