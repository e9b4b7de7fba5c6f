#[path = "utils/datetime.rs"]
mod datetime;

#[path = "utils/format.rs"]
mod format;
