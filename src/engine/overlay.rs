// egui text overlay
// Paints a frame's labels on top of the quad pass. egui is used purely as a
// painter here: no widgets, no input.

use super::components::Rgb;
use super::draw_list::{Anchor, Label};

pub struct TextOverlay {
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl TextOverlay {
    pub fn new(
        window: &winit::window::Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(egui::Visuals::dark());

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface_format,
            None,  // no depth
            1,     // msaa samples
            false, // no dithering
        );

        Self {
            egui_ctx,
            egui_state,
            egui_renderer,
        }
    }

    /// Tessellate and draw `labels` into `view`, loading what is already there.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &winit::window::Window,
        view: &wgpu::TextureView,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
        labels: &[Label],
    ) {
        let raw_input = self.egui_state.take_egui_input(window);

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("labels"),
            ));
            for label in labels {
                painter.text(
                    egui::pos2(label.pos.x, label.pos.y),
                    align(label.anchor),
                    &label.text,
                    egui::FontId::proportional(label.size),
                    color32(label.color),
                );
            }
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer
            .update_buffers(device, queue, encoder, &tris, screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Text Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.egui_renderer
                .render(&mut render_pass.forget_lifetime(), &tris, screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

fn align(anchor: Anchor) -> egui::Align2 {
    match anchor {
        Anchor::LeftTop => egui::Align2::LEFT_TOP,
        Anchor::CenterTop => egui::Align2::CENTER_TOP,
        Anchor::Center => egui::Align2::CENTER_CENTER,
    }
}

fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_map_to_egui_alignment() {
        assert_eq!(align(Anchor::LeftTop), egui::Align2::LEFT_TOP);
        assert_eq!(align(Anchor::CenterTop), egui::Align2::CENTER_TOP);
        assert_eq!(align(Anchor::Center), egui::Align2::CENTER_CENTER);
    }

    #[test]
    fn label_colour_is_opaque() {
        let c = color32(Rgb::new(10, 20, 30));
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (10, 20, 30, 255));
    }
}
