//! Opens a window and clears it every frame. Nothing is drawn.

use quadgl_demos::CLEAR_COLOR;
use quadgl_engine::core::{App, AppControl, FrameCtx};

struct ClearWindow;

impl App for ClearWindow {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        ctx.clear(CLEAR_COLOR);
        AppControl::Continue
    }
}

fn main() -> anyhow::Result<()> {
    quadgl_demos::run(ClearWindow)
}
