pub mod content;
pub mod dates;
pub mod labels;
pub mod size;

pub use content::*;
pub use dates::*;
pub use labels::*;
pub use size::*;
