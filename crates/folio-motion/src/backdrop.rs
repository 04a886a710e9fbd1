use rand::Rng;

use folio_engine::core::CancelToken;
use folio_engine::coords::Viewport;
use folio_engine::surface::Surface;

use crate::config::GearFieldConfig;
use crate::field::GearField;
use crate::gear::Gear;

/// The mounted gear background.
///
/// Lifecycle:
/// - [`mount`](Self::mount) sizes the surface to the viewport, acquires a
///   drawing context and generates the field. Without a context the backdrop
///   stays inert: no gears, no frame loop, no resize listener.
/// - [`frame`](Self::frame) runs once per host frame until the cancel token
///   fires.
/// - [`on_resize`](Self::on_resize) only resizes the surface.
/// - [`teardown`](Self::teardown) (also run on drop) cancels the loop and
///   detaches the resize listener.
#[derive(Debug)]
pub struct Backdrop {
    surface: Surface,
    field: Option<GearField>,
    token: CancelToken,
    listening: bool,
}

impl Backdrop {
    pub fn mount<R: Rng + ?Sized>(viewport: Viewport, config: &GearFieldConfig, rng: &mut R) -> Self {
        let mut surface = Surface::new(viewport);

        let field = if surface.context().is_some() {
            Some(GearField::initialize(viewport, config, rng))
        } else {
            log::debug!(
                "backdrop: no drawing context for {}x{}, rendering nothing",
                viewport.width,
                viewport.height
            );
            None
        };

        let listening = field.is_some();

        Self {
            surface,
            field,
            token: CancelToken::new(),
            listening,
        }
    }

    /// A handle to the frame loop's running flag.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Whether the frame loop should keep running.
    pub fn is_running(&self) -> bool {
        self.field.is_some() && !self.token.is_cancelled()
    }

    /// Runs one animation frame: advance every gear, then repaint.
    ///
    /// Returns `false` once the loop is cancelled (or was never started); the
    /// host stops scheduling frames then.
    pub fn frame(&mut self) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        let Some(field) = self.field.as_mut() else {
            return false;
        };

        field.tick();

        // A surface resized to nothing keeps animating but paints nothing.
        if let Some(mut ctx) = self.surface.context() {
            field.render(&mut ctx);
        }

        true
    }

    /// Resize listener: follows the viewport, never regenerates the gears.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.listening {
            return;
        }
        self.surface.resize(viewport);
    }

    /// Stops the frame loop and detaches the resize listener. Idempotent.
    pub fn teardown(&mut self) {
        if self.token.is_cancelled() && !self.listening {
            return;
        }
        self.token.cancel();
        self.listening = false;
        log::debug!("backdrop torn down");
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Current gears; empty when the backdrop is inert.
    pub fn gears(&self) -> &[Gear] {
        self.field.as_ref().map(GearField::gears).unwrap_or_default()
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.teardown();
    }
}
