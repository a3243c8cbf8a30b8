//! Presentation: chart specifications and the HTML page that draws them.

pub mod chart;
pub mod layout;
