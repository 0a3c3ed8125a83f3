use iced::Point;

/// Last pointer position reported by the global listener.
#[derive(Debug, Default)]
pub(crate) struct PointerWatchState {
    cursor: Option<Point>,
}

impl PointerWatchState {
    pub(crate) fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub(super) fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }
}
