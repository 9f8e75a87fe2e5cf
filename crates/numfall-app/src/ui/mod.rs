pub mod controls;
pub mod grid;
pub mod home_screen;
pub mod status_line;
pub mod toast;
