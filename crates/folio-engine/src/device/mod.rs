//! GPU device + swapchain management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for a window
//! - configures the swapchain and keeps it in sync with window resizes
//! - hands out one encoder + view per presented frame

mod gpu;
mod swapchain;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
