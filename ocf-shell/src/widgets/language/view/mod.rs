pub(crate) mod language_picker;
