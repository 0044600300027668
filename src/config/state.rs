// src/config/state.rs
use super::options::{AppOptions, Category};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which view the left panel selects
    pub category: Category,

    pub window_w: u32,
    pub window_h: u32,

    /// Height of each of the two table views
    pub table_height: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            category: Category::All,
            window_w: 1200,
            window_h: 860,
            table_height: 350.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
