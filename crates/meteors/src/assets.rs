//! Game asset bundle
//!
//! All sprites and the score font are loaded once at startup into a
//! [`GameAssets`] value that the world owns.

use std::path::Path;

use arcade_engine::assets::{
    load_sprite, load_sprite_dir, AssetError, FontFace, Sprite, SpriteHandle,
};

/// Player ship image, relative to the asset directory
pub const PLAYER_SPRITE: &str = "player.png";

/// Directory of interchangeable meteor images
pub const METEOR_SPRITE_DIR: &str = "meteors";

/// Bullet image
pub const BULLET_SPRITE: &str = "lasers/laserBlue01.png";

/// Score font
pub const SCORE_FONT: &str = "font.ttf";

/// Everything the game draws
#[derive(Debug, Clone)]
pub struct GameAssets {
    /// Player ship
    pub player: SpriteHandle,

    /// Meteor pool; each spawn picks one at random
    pub meteors: Vec<SpriteHandle>,

    /// Bullet
    pub bullet: SpriteHandle,

    /// Score font
    pub font: FontFace,
}

impl GameAssets {
    /// Load the asset set from `dir`
    ///
    /// Any missing or undecodable file is an error; the caller is expected
    /// to treat it as fatal.
    pub fn load<P: AsRef<Path>>(dir: P, font_size: f32) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        log::info!("Loading game assets from {:?}", dir);

        let assets = Self {
            player: load_sprite(dir.join(PLAYER_SPRITE))?,
            meteors: load_sprite_dir(dir.join(METEOR_SPRITE_DIR))?,
            bullet: load_sprite(dir.join(BULLET_SPRITE))?,
            font: FontFace::from_file(dir.join(SCORE_FONT), font_size)?,
        };
        Ok(assets)
    }

    /// Solid-color stand-ins with the dimensions of the standard art
    pub fn builtin(font_size: f32) -> Self {
        Self {
            player: Sprite::solid("player", 99, 75, [60, 140, 230, 255]),
            meteors: vec![
                Sprite::solid("meteor_big", 101, 84, [140, 110, 90, 255]),
                Sprite::solid("meteor_med", 43, 43, [150, 120, 95, 255]),
                Sprite::solid("meteor_small", 28, 28, [160, 130, 100, 255]),
                Sprite::solid("meteor_tiny", 18, 18, [170, 140, 110, 255]),
            ],
            bullet: Sprite::solid("laser", 9, 54, [80, 160, 255, 255]),
            font: FontFace::builtin(font_size),
        }
    }
}
