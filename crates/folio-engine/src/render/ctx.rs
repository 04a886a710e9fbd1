use crate::coords::Viewport;
use crate::device::Gpu;
use crate::paint::Color;

/// GPU handles a renderer needs for one frame, plus the logical viewport its
/// draw list was recorded in.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub(crate) fn from_gpu(gpu: &'a Gpu<'_>, viewport: Viewport) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            viewport,
        }
    }
}

/// The swapchain image being drawn this frame and the encoder recording into it.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub(crate) fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }

    /// Fills the whole frame with `color`.
    pub(crate) fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_array().map(f64::from);
        self.begin(Some("folio clear"), wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }));
    }

    /// Opens a pass that paints over what the frame already holds.
    pub fn overlay_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        self.begin(Some(label), wgpu::LoadOp::Load)
    }

    fn begin(&mut self, label: Option<&str>, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label,
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
