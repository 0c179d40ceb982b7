//! Small helpers shared by the model, bot and scheduler layers.

pub mod math;
pub mod parse;
pub mod text;
