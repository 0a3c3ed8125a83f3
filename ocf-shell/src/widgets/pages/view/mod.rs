pub(crate) mod page_content;
