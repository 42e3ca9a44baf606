pub mod cursor;
pub mod line;

pub use cursor::Cursor;
pub use line::Line;
