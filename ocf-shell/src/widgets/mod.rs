pub(crate) mod language;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod pointer_watch;
pub(crate) mod router;
pub(crate) mod search;
pub(crate) mod viewport;
