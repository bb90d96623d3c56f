//! Blank raster shown before any frame has loaded.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Resource holding the blank surface texture.
#[derive(Resource)]
pub struct BlankFrame {
    pub handle: Handle<Image>,
}

/// Blank texture size in pixels; it is stretched to fill the surface.
pub const BLANK_WIDTH: u32 = 64;
pub const BLANK_HEIGHT: u32 = 48;

/// Create a flat dark image with a faint cell grid so the empty surface is
/// distinguishable from the window background.
pub fn create_blank_frame() -> Image {
    let (width, height) = (BLANK_WIDTH as usize, BLANK_HEIGHT as usize);
    let mut data = vec![0u8; width * height * 4];

    let fill: [u8; 4] = [32, 32, 36, 255];
    let grid: [u8; 4] = [44, 44, 50, 255];

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 4;
            let on_grid = x % 8 == 0 || y % 8 == 0;
            let color = if on_grid { grid } else { fill };
            data[idx..idx + 4].copy_from_slice(&color);
        }
    }

    Image::new(
        Extent3d {
            width: BLANK_WIDTH,
            height: BLANK_HEIGHT,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

/// Startup system to create and register the blank texture.
pub fn setup_blank_frame(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let handle = images.add(create_blank_frame());
    commands.insert_resource(BlankFrame { handle });
}
