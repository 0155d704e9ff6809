//! Material to texture-combiner translation
//!
//! Every material starts from the single-texture modulate setup. The terrain
//! effect then selects the primary texture on stage 0 and blends the detail
//! texture over it on stage 1, using the vertex alpha as the blend factor.

use super::device::{
    CombinerArg as Arg, CombinerOp as Op, GraphicsDevice, RenderState, TextureStageState as Stage,
};
use crate::gfx::resources::{Material, MaterialEffect};
use crate::gfx::scene::vertex::WHITE;

/// Stage states that make up the default effect.
const DEFAULT_COMBINER: [(u32, Stage); 8] = [
    (0, Stage::ColorOp(Op::Modulate)),
    (0, Stage::ColorArg1(Arg::Diffuse)),
    (0, Stage::ColorArg2(Arg::Texture)),
    (0, Stage::AlphaOp(Op::Modulate)),
    (0, Stage::AlphaArg1(Arg::Diffuse)),
    (0, Stage::AlphaArg2(Arg::Texture)),
    (1, Stage::ColorOp(Op::Disable)),
    (1, Stage::AlphaOp(Op::Disable)),
];

const TERRAIN_COMBINER: [(u32, Stage); 9] = [
    (1, Stage::AlphaOp(Op::Modulate)),
    (1, Stage::AlphaArg1(Arg::Texture)),
    (1, Stage::AlphaArg2(Arg::Texture)),
    (0, Stage::ColorOp(Op::SelectArg1)),
    (0, Stage::ColorArg1(Arg::Texture)),
    (0, Stage::ColorArg2(Arg::Texture)),
    (1, Stage::ColorOp(Op::BlendDiffuseAlpha)),
    (1, Stage::ColorArg1(Arg::Texture)),
    (1, Stage::ColorArg2(Arg::Current)),
];

/// Restores the single-texture modulate configuration.
pub fn reset_combiner(device: &mut dyn GraphicsDevice) {
    for (stage, state) in DEFAULT_COMBINER {
        device.set_texture_stage_state(stage, state);
    }
}

/// Uploads the material's texture, lighting description and combiner setup.
pub fn apply_material(device: &mut dyn GraphicsDevice, material: &Material) {
    if let Some(texture) = material.texture {
        device.set_texture(0, Some(texture.id));
    }
    device.set_material(&material.desc());

    reset_combiner(device);

    match material.effect {
        MaterialEffect::Default => {}
        MaterialEffect::Terrain => apply_terrain(device, material),
    }
}

/// Without a detail texture the terrain falls back to the default effect.
fn apply_terrain(device: &mut dyn GraphicsDevice, material: &Material) {
    let Some(detail) = material.detail else {
        log::debug!("Material {} has no detail texture", material.name);
        return;
    };

    device.set_render_state(RenderState::TextureFactor(WHITE));
    for (stage, state) in TERRAIN_COMBINER {
        device.set_texture_stage_state(stage, state);
    }
    device.set_texture(1, Some(detail.id));
}

/// Depth state for a material; materials flagged `no_z_test` always pass.
pub fn depth_state(no_z_test: bool) -> RenderState {
    if no_z_test {
        RenderState::DepthCompare(wgpu::CompareFunction::Always)
    } else {
        RenderState::DepthCompare(wgpu::CompareFunction::LessEqual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::recording::{DeviceCommand, RecordingDevice};
    use crate::gfx::resources::{Texture, TextureId};

    fn texture(id: u32) -> Texture {
        Texture {
            id: TextureId(id),
            width: 64,
            height: 64,
        }
    }

    fn stage_states(commands: &[DeviceCommand]) -> Vec<(u32, Stage)> {
        commands
            .iter()
            .filter_map(|command| match command {
                DeviceCommand::SetTextureStageState(stage, state) => Some((*stage, *state)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_effect_sequence() {
        let mut device = RecordingDevice::new();
        let material = Material::diffuse(Some(texture(7)), Some("plane"));
        apply_material(&mut device, &material);

        let commands = &device.commands();
        assert_eq!(commands[0], DeviceCommand::SetTexture(0, Some(TextureId(7))));
        assert_eq!(commands[1], DeviceCommand::SetMaterial(material.desc()));
        assert_eq!(stage_states(commands), DEFAULT_COMBINER.to_vec());
        assert_eq!(commands.len(), 2 + DEFAULT_COMBINER.len());
    }

    #[test]
    fn test_untextured_material_keeps_bound_texture() {
        let mut device = RecordingDevice::new();
        apply_material(&mut device, &Material::new(None));
        assert!(!device
            .commands()
            .iter()
            .any(|command| matches!(command, DeviceCommand::SetTexture(..))));
    }

    #[test]
    fn test_terrain_effect_blends_detail_on_stage_one() {
        let mut device = RecordingDevice::new();
        let material = Material::diffuse(Some(texture(1)), Some("terrain"))
            .with_effect(MaterialEffect::Terrain)
            .with_detail(Some(texture(2)));
        apply_material(&mut device, &material);

        let commands = &device.commands();
        let factor = commands
            .iter()
            .position(|c| *c == DeviceCommand::SetRenderState(RenderState::TextureFactor(WHITE)))
            .unwrap();
        // Terrain states come after the full reset
        assert_eq!(factor, 2 + DEFAULT_COMBINER.len());

        let mut expected = DEFAULT_COMBINER.to_vec();
        expected.extend_from_slice(&TERRAIN_COMBINER);
        assert_eq!(stage_states(commands), expected);
        assert_eq!(
            commands.last(),
            Some(&DeviceCommand::SetTexture(1, Some(TextureId(2))))
        );
    }

    #[test]
    fn test_terrain_without_detail_is_default() {
        let mut device = RecordingDevice::new();
        let material = Material::diffuse(Some(texture(1)), None).with_effect(MaterialEffect::Terrain);
        apply_material(&mut device, &material);
        assert_eq!(stage_states(&device.commands()), DEFAULT_COMBINER.to_vec());
    }

    #[test]
    fn test_depth_state() {
        assert_eq!(
            depth_state(true),
            RenderState::DepthCompare(wgpu::CompareFunction::Always)
        );
        assert_eq!(
            depth_state(false),
            RenderState::DepthCompare(wgpu::CompareFunction::LessEqual)
        );
    }
}
