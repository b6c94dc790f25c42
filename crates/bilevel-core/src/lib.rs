pub mod buffer;
pub mod consts;
pub mod error;
pub mod execution;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod pixel;
pub mod region;
