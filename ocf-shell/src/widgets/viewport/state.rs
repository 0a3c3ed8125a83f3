use super::model::{ViewportClass, classify};

/// Latest measured window width and the classification derived from it.
#[derive(Debug, Default)]
pub(crate) struct ViewportState {
    width: Option<f32>,
    class: ViewportClass,
}

impl ViewportState {
    pub(crate) fn width(&self) -> Option<f32> {
        self.width
    }

    pub(crate) fn class(&self) -> ViewportClass {
        self.class
    }

    /// Record a new width and return the previous classification.
    pub(super) fn measure(&mut self, width: f32) -> ViewportClass {
        let previous = self.class;
        self.width = Some(width);
        self.class = classify(self.width);
        previous
    }
}
