pub mod chord;
pub mod command;
pub mod duration;
pub mod letter;
pub mod modifier;
pub mod pitch;
pub mod program;
pub mod quality;
pub mod tempo;
