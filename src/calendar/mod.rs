mod calendar_date;
mod calendar_links;

pub use calendar_date::*;
pub use calendar_links::*;
