use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub accent: Color,    // Yellow
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub disks: [Color; 5],
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Unsorted bars, visited nodes
    secondary: Color::Rgb(250, 179, 135), // Compared bars, newest visit
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161), // Sorted bars, resolved path
    error: Color::Rgb(243, 139, 168),   // Swapped bars
    accent: Color::Rgb(249, 226, 175),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    disks: [
        Color::Rgb(243, 139, 168),
        Color::Rgb(250, 179, 135),
        Color::Rgb(249, 226, 175),
        Color::Rgb(166, 227, 161),
        Color::Rgb(137, 180, 250),
    ],
};

impl Theme {
    /// Disk colour, cycling by size
    pub fn disk(&self, size: u32) -> Color {
        let index = (size as usize).saturating_sub(1) % self.disks.len();
        self.disks[index]
    }
}
