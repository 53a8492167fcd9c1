pub mod error;
pub mod consts;
pub mod raster;
pub mod color;
pub mod mask;
pub mod histogram;
pub mod features;
pub mod locate;
pub mod classify;
pub mod session;
pub mod io;
