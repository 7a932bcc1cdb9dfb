//! Board layout, hit-testing, and drawing.
//!
//! The layout is a pure function of the available area, so the same
//! [`BoardLayout`] that was drawn is used to resolve mouse clicks.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use tenzies_core::view::{INSTRUCTIONS, TITLE};
use tenzies_core::{BoardView, DICE_COUNT, DieView};

/// Width of a die, borders included.
pub const DIE_WIDTH: u16 = 7;
/// Height of a die, borders included.
pub const DIE_HEIGHT: u16 = 3;
/// Dice per row.
pub const COLUMNS: usize = 5;
/// Horizontal space between dice.
const COLUMN_GAP: u16 = 2;
/// Vertical space between rows of dice.
const ROW_GAP: u16 = 1;
/// Width of the roll button, borders included.
const BUTTON_WIDTH: u16 = 16;
/// Height of the roll button, borders included.
const BUTTON_HEIGHT: u16 = 3;

const ROWS: u16 = DICE_COUNT.div_ceil(COLUMNS) as u16;

/// Width of the dice grid.
pub const GRID_WIDTH: u16 = COLUMNS as u16 * DIE_WIDTH + (COLUMNS as u16 - 1) * COLUMN_GAP;
/// Height of the dice grid.
pub const GRID_HEIGHT: u16 = ROWS * DIE_HEIGHT + (ROWS - 1) * ROW_GAP;

/// Smallest inner area the board fits in.
pub const MIN_WIDTH: u16 = GRID_WIDTH;
/// Smallest inner area the board fits in.
pub const MIN_HEIGHT: u16 = 1 + 2 + 1 + GRID_HEIGHT + 1 + BUTTON_HEIGHT + 1 + 1;

/// A control on the board that can take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The die at a zero-based position.
    Die(usize),
    /// The roll / new game button.
    Primary,
}

impl Control {
    const SLOTS: usize = DICE_COUNT + 1;

    fn index(self) -> usize {
        match self {
            Self::Die(i) => i.min(DICE_COUNT - 1),
            Self::Primary => DICE_COUNT,
        }
    }

    fn from_index(index: usize) -> Self {
        if index < DICE_COUNT {
            Self::Die(index)
        } else {
            Self::Primary
        }
    }

    /// Next control in reading order (wrapping).
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::SLOTS)
    }

    /// Previous control in reading order (wrapping).
    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::SLOTS - 1) % Self::SLOTS)
    }

    /// Control one row down; the bottom row leads to the button.
    pub fn down(self) -> Self {
        match self {
            Self::Die(i) if i + COLUMNS < DICE_COUNT => Self::Die(i + COLUMNS),
            _ => Self::Primary,
        }
    }

    /// Control one row up; the button leads to the middle of the bottom row.
    pub fn up(self) -> Self {
        match self {
            Self::Die(i) if i >= COLUMNS => Self::Die(i - COLUMNS),
            Self::Die(i) => Self::Die(i),
            Self::Primary => Self::Die(DICE_COUNT - 1 - COLUMNS / 2),
        }
    }
}

/// Screen regions of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Title line.
    pub title: Rect,
    /// Instructions paragraph.
    pub instructions: Rect,
    /// One rectangle per die, in display order.
    pub dice: [Rect; DICE_COUNT],
    /// The roll / new game button.
    pub button: Rect,
    /// Win announcement line.
    pub announcement: Rect,
}

impl BoardLayout {
    /// Lay the board out inside `area`, or `None` if it does not fit.
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let [title, instructions, _, grid, _, button_row, _, announcement] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(GRID_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let grid_x = grid.x + (grid.width - GRID_WIDTH) / 2;
        let dice = std::array::from_fn(|i| {
            let col = (i % COLUMNS) as u16;
            let row = (i / COLUMNS) as u16;
            Rect::new(
                grid_x + col * (DIE_WIDTH + COLUMN_GAP),
                grid.y + row * (DIE_HEIGHT + ROW_GAP),
                DIE_WIDTH,
                DIE_HEIGHT,
            )
        });

        let button_width = BUTTON_WIDTH.min(button_row.width);
        let button = Rect::new(
            button_row.x + (button_row.width - button_width) / 2,
            button_row.y,
            button_width,
            BUTTON_HEIGHT,
        );

        Some(Self {
            title,
            instructions,
            dice,
            button,
            announcement,
        })
    }

    /// The control under a screen cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        if let Some(i) = self.dice.iter().position(|r| r.contains(pos)) {
            return Some(Control::Die(i));
        }
        self.button.contains(pos).then_some(Control::Primary)
    }
}

/// Draw the whole board into `area`. Returns the layout used, if it fit.
pub fn draw_board(
    frame: &mut Frame,
    view: &BoardView,
    focus: Control,
    area: Rect,
) -> Option<BoardLayout> {
    let border = if view.won { Color::Green } else { Color::Blue };
    let block = Block::default()
        .title(format!(" {TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(layout) = BoardLayout::compute(inner) else {
        let msg = Paragraph::new(format!(
            "Terminal too small: need {}x{}",
            MIN_WIDTH + 2,
            MIN_HEIGHT + 2
        ))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return None;
    };

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, Style::default().fg(Color::White).bold()))
            .alignment(Alignment::Center),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(INSTRUCTIONS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout.instructions,
    );

    for (i, (die, rect)) in view.dice.iter().zip(layout.dice).enumerate() {
        draw_die(frame, die, focus == Control::Die(i), rect);
    }

    draw_button(
        frame,
        view.primary_label(),
        focus == Control::Primary,
        layout.button,
    );

    if let Some(text) = view.announcement() {
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Green).bold()))
                .alignment(Alignment::Center),
            layout.announcement,
        );
    }

    Some(layout)
}

fn draw_die(frame: &mut Frame, die: &DieView, focused: bool, area: Rect) {
    let face = if die.held {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(focus_border(focused))
        .border_style(focus_style(focused));

    let paragraph = Paragraph::new(Span::styled(format!(" {} ", die.value), face))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_button(frame: &mut Frame, label: &str, focused: bool, area: Rect) {
    let label_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(focus_border(focused))
        .border_style(focus_style(focused));

    let paragraph = Paragraph::new(Span::styled(format!(" {label} "), label_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn focus_border(focused: bool) -> BorderType {
    if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
