pub(crate) mod resume;
pub(crate) mod versions;
