/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested context version as `(major, minor)`.
    pub version: (u8, u8),

    /// Request a core profile context (no deprecated fixed-function API).
    pub core_profile: bool,

    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,

    /// Prefer a framebuffer config with an alpha channel the compositor honours,
    /// so a translucent clear colour shows through.
    pub transparent: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            core_profile: true,
            vsync: true,
            transparent: true,
        }
    }
}
