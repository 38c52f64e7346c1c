pub mod level;
pub mod profession;
pub mod profiles;

pub use level::{InvalidLevel, Level};
pub use profession::Profession;
pub use profiles::{ProfessionLevels, Profiles};
