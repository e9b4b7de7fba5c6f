//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{HEADER_HEIGHT, TOAST_HEIGHT, TOAST_WIDTH};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Header, body and a one-line status bar, top to bottom
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Search box above the repository list
    #[must_use]
    pub fn list_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Tags on the left, description on the right
    #[must_use]
    pub fn detail_layout(area: Rect) -> Vec<Rect> {
        let tags_width = std::cmp::min(area.width / 3, 40);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(tags_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 60 };
        (help_width, help_height)
    }

    /// Top-right corner slot for the toast, clipped to the screen
    #[must_use]
    pub fn toast_area(area: Rect) -> Rect {
        let width = std::cmp::min(TOAST_WIDTH, area.width);
        let height = std::cmp::min(TOAST_HEIGHT, area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + std::cmp::min(1, area.height.saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}
