pub mod generate;
pub mod pipeline;
pub mod remote;
pub mod token;
