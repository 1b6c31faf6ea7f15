pub(crate) mod color_list;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) color_list: color_list::ColorListWidget,
}
