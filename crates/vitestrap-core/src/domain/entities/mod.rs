pub mod answers;
pub mod command;
pub mod config_patch;
pub mod install_plan;
pub mod project_name;
pub mod scaffold_layout;

pub use answers::{Answers, AnswersBuilder};
pub use command::CommandSpec;
pub use config_patch::TailwindVitePatch;
pub use install_plan::InstallPlan;
pub use project_name::ProjectName;
pub use scaffold_layout::{FileToWrite, ScaffoldLayout};
