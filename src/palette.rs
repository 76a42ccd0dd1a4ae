use egui::Color32;

pub const PANE_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
pub const DRAWING_AREA_COLOR: Color32 = Color32::WHITE;
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(80, 80, 80);
pub const BUTTON_BORDER: Color32 = Color32::from_rgb(80, 80, 80);
pub const ACTION_BORDER: Color32 = Color32::BLACK;
pub const SELECTED_BORDER: Color32 = Color32::from_rgb(0, 121, 241);

/// Swatches of the bottom pane, laid out as two rows of seven
pub const COLORS: [Color32; 14] = [
    Color32::BLACK,
    Color32::from_rgb(230, 41, 55),   // red
    Color32::from_rgb(253, 249, 0),   // yellow
    Color32::from_rgb(255, 109, 194), // pink
    Color32::from_rgb(102, 191, 255), // sky blue
    Color32::from_rgb(255, 203, 0),   // gold
    Color32::from_rgb(0, 158, 47),    // lime
    Color32::WHITE,
    Color32::from_rgb(0, 121, 241),   // blue
    Color32::from_rgb(0, 228, 48),    // green
    Color32::from_rgb(200, 122, 255), // purple
    Color32::from_rgb(135, 60, 190),  // violet
    Color32::from_rgb(255, 161, 0),   // orange
    Color32::from_rgb(0, 82, 172),    // dark blue
];

pub const COLORS_PER_ROW: usize = COLORS.len() / 2;

const _: () = assert!(COLORS.len() % 2 == 0, "palette must split into two rows");

/// Short label for the status pane
pub fn color_name(color: Color32) -> String {
    const NAMES: [&str; 14] = [
        "black", "red", "yellow", "pink", "sky blue", "gold", "lime", "white", "blue", "green",
        "purple", "violet", "orange", "dark blue",
    ];
    COLORS
        .iter()
        .position(|c| *c == color)
        .map(|i| NAMES[i].to_owned())
        .unwrap_or_else(|| format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b()))
}
