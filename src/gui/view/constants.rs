//! View constants (layout/sizing).

pub(crate) const SIDEBAR_W: f32 = 200.0;

pub(crate) const ARENA_H: f32 = 600.0;

pub(crate) const TITLE_TEXT: f32 = 20.0;
pub(crate) const HEADER_TEXT: f32 = 20.0;
pub(crate) const LABEL_TEXT: f32 = 16.0;
