/// Tile grid rasterization
pub mod compositor;
/// Post-composite grain overlay
pub mod grain;
/// Render pipeline, configuration and cancellation
pub mod renderer;
