pub mod app;
pub mod zoom_controls;
pub mod zoom_readout;
