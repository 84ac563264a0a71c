//! Game state and the per-tick simulation

use arcade_engine::foundation::math::Vec2;
use arcade_engine::foundation::time::TickTimer;
use arcade_engine::physics::Aabb;
use arcade_engine::render::{Color, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::GameAssets;
use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::controls::Controls;
use crate::entity::Entity;
use crate::meteor::{Meteor, MeteorParams};
use crate::player::{Player, PlayerParams};

/// Where newly fired bullets go
pub trait BulletSink {
    /// Take ownership of a new bullet
    fn add_bullet(&mut self, bullet: Bullet);
}

impl BulletSink for Vec<Bullet> {
    fn add_bullet(&mut self, bullet: Bullet) {
        self.push(bullet);
    }
}

/// Offset of the score text from the top center of the screen
const SCORE_OFFSET: (f64, f64) = (-100.0, 50.0);

/// Everything in play: the ship, meteors, bullets and the score
pub struct World {
    player: Player,
    meteors: Vec<Meteor>,
    bullets: Vec<Bullet>,
    spawn_timer: TickTimer,
    score: u32,
    ticks: u64,

    screen_width: f64,
    screen_height: f64,
    cull_offscreen_bullets: bool,
    meteor_params: MeteorParams,
    player_params: PlayerParams,
    assets: GameAssets,
    rng: StdRng,
}

impl World {
    /// Create a world, seeding meteor spawns from the config
    pub fn new(config: &GameConfig, assets: GameAssets) -> Self {
        let rng = match config.gameplay.seed {
            Some(seed) => {
                log::info!("Seeding meteor spawns with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, assets, rng)
    }

    /// Create a world with the given random source
    pub fn with_rng(config: &GameConfig, assets: GameAssets, rng: StdRng) -> Self {
        let gameplay = &config.gameplay;
        let screen_width = config.screen_width();
        let screen_height = config.screen_height();
        let player_params = PlayerParams::from_config(gameplay, assets.bullet.clone());

        Self {
            player: Player::spawn(
                screen_width,
                screen_height,
                assets.player.clone(),
                player_params.clone(),
            ),
            meteors: Vec::new(),
            bullets: Vec::new(),
            spawn_timer: TickTimer::from_millis(
                gameplay.meteor_spawn_interval_ms,
                gameplay.ticks_per_second,
            ),
            score: 0,
            ticks: 0,
            screen_width,
            screen_height,
            cull_offscreen_bullets: gameplay.cull_offscreen_bullets,
            meteor_params: MeteorParams::from_config(gameplay),
            player_params,
            assets,
            rng,
        }
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self, controls: Controls) {
        self.ticks += 1;

        self.player.update(controls, &mut self.bullets);

        self.spawn_timer.update();
        if self.spawn_timer.is_ready() {
            self.spawn_timer.reset();
            self.spawn_meteor();
        }

        for meteor in &mut self.meteors {
            meteor.update();
        }
        for bullet in &mut self.bullets {
            bullet.update();
        }

        if self.cull_offscreen_bullets {
            self.cull_bullets();
        }

        self.resolve_bullet_hits();
        self.resolve_player_hits();
    }

    fn spawn_meteor(&mut self) {
        match Meteor::spawn(
            self.screen_width,
            self.screen_height,
            &self.assets.meteors,
            &self.meteor_params,
            &mut self.rng,
        ) {
            Some(meteor) => self.meteors.push(meteor),
            None => log::warn!("No meteor sprites loaded; skipping spawn"),
        }
    }

    fn screen_bounds(&self) -> Aabb {
        Aabb::new(0.0, 0.0, self.screen_width, self.screen_height)
    }

    fn cull_bullets(&mut self) {
        let bounds = self.screen_bounds();
        let before = self.bullets.len();
        self.bullets.retain(|bullet| !bullet.collider().is_outside(&bounds));

        let culled = before - self.bullets.len();
        if culled > 0 {
            log::trace!("Culled {} off-screen bullets", culled);
        }
    }

    /// Destroy meteors hit by bullets and score them
    ///
    /// Each meteor is matched with the first live bullet overlapping it, and
    /// that pair is removed together. A bullet can claim only one meteor per
    /// tick. Returns the number of meteors destroyed.
    pub fn resolve_bullet_hits(&mut self) -> u32 {
        let mut meteor_hit = vec![false; self.meteors.len()];
        let mut bullet_spent = vec![false; self.bullets.len()];
        let bullet_colliders: Vec<Aabb> = self.bullets.iter().map(Bullet::collider).collect();

        for (meteor, hit) in self.meteors.iter().zip(meteor_hit.iter_mut()) {
            let collider = meteor.collider();
            let claimed = bullet_colliders
                .iter()
                .zip(bullet_spent.iter())
                .position(|(bullet, spent)| !spent && collider.intersects(bullet));
            if let Some(index) = claimed {
                bullet_spent[index] = true;
                *hit = true;
            }
        }

        let mut hits = meteor_hit.iter().copied();
        self.meteors.retain(|_| !hits.next().unwrap_or(false));
        let mut spent = bullet_spent.iter().copied();
        self.bullets.retain(|_| !spent.next().unwrap_or(false));

        let destroyed = meteor_hit.iter().filter(|hit| **hit).count() as u32;
        if destroyed > 0 {
            self.score += destroyed;
            log::debug!("{} meteors destroyed, score {}", destroyed, self.score);
        }
        destroyed
    }

    /// Reset the game if any meteor touches the ship
    ///
    /// Returns whether a reset happened.
    pub fn resolve_player_hits(&mut self) -> bool {
        let player = self.player.collider();
        let crashed = self.meteors.iter().any(|meteor| meteor.collider().intersects(&player));
        if crashed {
            self.reset();
        }
        crashed
    }

    /// Start over: fresh ship, nothing in flight, score zero
    ///
    /// The meteor spawn timer keeps its progress.
    pub fn reset(&mut self) {
        log::info!("Game reset with final score {}", self.score);
        self.player = Player::spawn(
            self.screen_width,
            self.screen_height,
            self.assets.player.clone(),
            self.player_params.clone(),
        );
        self.meteors.clear();
        self.bullets.clear();
        self.score = 0;
    }

    /// Put a meteor into play
    pub fn add_meteor(&mut self, meteor: Meteor) {
        self.meteors.push(meteor);
    }

    /// Draw the ship, meteors, bullets and then the score
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.player.draw(surface);
        for meteor in &self.meteors {
            meteor.draw(surface);
        }
        for bullet in &self.bullets {
            bullet.draw(surface);
        }

        let position = Vec2::new(self.screen_width / 2.0 + SCORE_OFFSET.0, SCORE_OFFSET.1);
        surface.draw_text(&self.score_text(), &self.assets.font, position, Color::WHITE);
    }

    /// The ship
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Live meteors in spawn order
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// Live bullets in firing order
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Meteors destroyed since the last reset
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score as six zero-padded digits
    pub fn score_text(&self) -> String {
        format!("{:06}", self.score)
    }

    /// Meteor spawn countdown
    pub fn spawn_timer(&self) -> &TickTimer {
        &self.spawn_timer
    }

    /// Ticks simulated since creation, across resets
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Loaded sprites and font
    pub fn assets(&self) -> &GameAssets {
        &self.assets
    }

    /// Screen size in pixels
    pub fn screen_size(&self) -> (f64, f64) {
        (self.screen_width, self.screen_height)
    }
}

impl BulletSink for World {
    fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("player", &self.player)
            .field("meteors", &self.meteors.len())
            .field("bullets", &self.bullets.len())
            .field("score", &self.score)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}
