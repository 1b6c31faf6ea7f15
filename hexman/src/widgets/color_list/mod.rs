pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ColorListCommand;
pub(crate) use event::{ColorListEffect, ColorListEvent};
use iced::Task;
use model::{ColorListViewModel, Layout};
use state::ColorListState;

/// Color list widget: owns the authoritative palette and the private
/// editing state of every entry.
pub(crate) struct ColorListWidget {
    state: ColorListState,
}

impl ColorListWidget {
    /// Create a widget showing the default palette.
    pub(crate) fn new(layout: Layout, grid_columns: usize) -> Self {
        Self {
            state: ColorListState::new(layout, grid_columns),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ColorListCommand,
    ) -> Task<ColorListEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a read-only view model for the list views.
    pub(crate) fn vm(&self) -> ColorListViewModel<'_> {
        ColorListViewModel {
            entries: self.state.entry_view_models(),
            layout: self.state.layout(),
            grid_columns: self.state.grid_columns(),
        }
    }

    /// Return the active layout.
    pub(crate) fn layout(&self) -> Layout {
        self.state.layout()
    }

    /// Return whether a feedback timer is pending.
    pub(crate) fn has_pending_feedback(&self) -> bool {
        self.state.has_pending_feedback()
    }
}
