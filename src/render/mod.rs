/// Premultiplied RGBA8 compositing helpers.
pub mod composite;
/// Raster surface backed by `vello_cpu`.
pub mod cpu;
/// The drawing-surface capability and a recording implementation.
pub mod surface;
