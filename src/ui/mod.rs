/// View helpers shared by the main window
pub mod palette;
pub mod results;
