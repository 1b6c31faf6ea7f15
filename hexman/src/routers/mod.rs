pub(crate) mod color_list;
pub(crate) mod keyboard;
