pub(crate) mod search_box;
