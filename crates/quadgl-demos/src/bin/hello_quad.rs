//! Clears the window and draws an orange quad from two indexed triangles.

use anyhow::Result;
use quadgl_demos::CLEAR_COLOR;
use quadgl_engine::core::{App, AppControl, FrameCtx};
use quadgl_engine::gl::Gl;
use quadgl_engine::quad::QuadScene;

#[derive(Default)]
struct HelloQuad {
    scene: Option<QuadScene<Gl>>,
}

impl App for HelloQuad {
    fn on_init(&mut self, gl: &Gl) -> Result<()> {
        let scene = QuadScene::new(gl)?;
        if !scene.has_program() {
            log::warn!("no shader program; frames will only clear");
        }
        self.scene = Some(scene);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        ctx.clear(CLEAR_COLOR);
        if let Some(scene) = &self.scene {
            scene.draw(ctx.gl);
        }
        AppControl::Continue
    }

    fn on_exit(&mut self, gl: &Gl) {
        if let Some(scene) = self.scene.take() {
            scene.release(gl);
        }
    }
}

fn main() -> Result<()> {
    quadgl_demos::run(HelloQuad::default())
}
