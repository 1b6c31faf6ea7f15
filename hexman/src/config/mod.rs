mod errors;
mod storage;

use serde::Deserialize;

use crate::widgets::color_list::model::Layout;

pub(crate) use storage::load_app_config;

const DEFAULT_GRID_COLUMNS: usize = 2;
const MAX_GRID_COLUMNS: usize = 4;

/// Start-up configuration. Read once, never written back.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AppConfig {
    layout: Layout,
    grid_columns: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Grid,
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    layout: Option<String>,
    grid_columns: Option<usize>,
}

impl AppConfig {
    /// Return the initial list layout.
    pub(crate) fn layout(&self) -> Layout {
        self.layout
    }

    /// Return the number of cards per grid row.
    pub(crate) fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    /// Build a config from the raw file payload, defaulting bad fields.
    fn from_raw(raw: RawConfig) -> Self {
        let mut config = AppConfig::default();

        if let Some(value) = raw.layout {
            match Layout::parse(&value) {
                Some(layout) => config.layout = layout,
                None => log::warn!("unknown layout in config: {value}"),
            }
        }

        if let Some(columns) = raw.grid_columns {
            if (1..=MAX_GRID_COLUMNS).contains(&columns) {
                config.grid_columns = columns;
            } else {
                log::warn!(
                    "grid_columns must be within 1..={MAX_GRID_COLUMNS}, got {columns}"
                );
            }
        }

        config
    }

    /// Apply an optional `HEXMAN_LAYOUT` value on top of the file config.
    fn with_layout_override(mut self, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };

        match Layout::parse(value) {
            Some(layout) => self.layout = layout,
            None => log::warn!("ignoring unknown HEXMAN_LAYOUT value: {value}"),
        }
        self
    }
}
