//! Whole-world scenarios driven tick by tick

use approx::assert_relative_eq;
use arcade_engine::assets::SpriteHandle;
use arcade_engine::foundation::math::Vec2;
use arcade_engine::render::{DrawCommand, RecordingSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::GameAssets;
use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::controls::Controls;
use crate::entity::Entity;
use crate::meteor::Meteor;
use crate::player::Player;
use crate::world::{BulletSink, World};

fn world_with(config: &GameConfig) -> World {
    World::with_rng(config, GameAssets::builtin(48.0), StdRng::seed_from_u64(42))
}

fn fresh_world() -> World {
    world_with(&GameConfig::default())
}

fn parked_meteor(world: &World, position: Vec2) -> Meteor {
    Meteor::new(position, Vec2::zeros(), 0.0, world.assets().meteors[0].clone())
}

fn parked_bullet(world: &World, center: Vec2) -> Bullet {
    Bullet::spawn(center, 0.0, world.assets().bullet.clone(), 0.0)
}

fn rising_bullet(world: &World) -> Bullet {
    Bullet::spawn(Vec2::new(400.0, 300.0), 0.0, world.assets().bullet.clone(), 10.0)
}

fn assert_fresh_state(world: &World) {
    let (width, height) = world.screen_size();
    let sprite: &SpriteHandle = &world.assets().player;

    assert_eq!(world.score(), 0);
    assert!(world.meteors().is_empty());
    assert!(world.bullets().is_empty());
    assert_relative_eq!(
        world.player().position(),
        Player::start_position(width, height, sprite)
    );
    assert_eq!(world.player().rotation(), 0.0);
    assert_eq!(world.player().fire_cooldown().elapsed_ticks(), 0);
}

#[test]
fn test_meteor_spawns_after_exactly_one_interval() {
    let mut world = fresh_world();
    let interval = world.spawn_timer().target_ticks();
    assert_eq!(interval, 300);

    for _ in 0..interval - 1 {
        world.update(Controls::empty());
    }
    assert!(world.meteors().is_empty());

    world.update(Controls::empty());
    assert_eq!(world.meteors().len(), 1);
    assert!(!world.spawn_timer().is_ready());
    assert_eq!(world.spawn_timer().elapsed_ticks(), 0);
}

#[test]
fn test_spawned_meteor_moves_toward_center() {
    let mut world = fresh_world();
    for _ in 0..300 {
        world.update(Controls::empty());
    }

    let meteor = &world.meteors()[0];
    let center = Vec2::new(400.0, 300.0);
    // One tick of travel has already happened since the spawn
    let spawned_at = meteor.position() - meteor.movement();
    assert_relative_eq!((spawned_at - center).norm(), 400.0, epsilon = 1e-9);
    assert!(meteor.movement().dot(&(center - spawned_at)) > 0.0);
}

#[test]
fn test_overlapping_meteor_and_bullet_destroy_each_other() {
    let mut world = fresh_world();
    world.add_meteor(parked_meteor(&world, Vec2::new(20.0, 20.0)));
    world.add_bullet(parked_bullet(&world, Vec2::new(40.0, 40.0)));

    assert_eq!(world.resolve_bullet_hits(), 1);
    assert!(world.meteors().is_empty());
    assert!(world.bullets().is_empty());
    assert_eq!(world.score(), 1);
    assert_eq!(world.score_text(), "000001");
}

#[test]
fn test_one_bullet_destroys_one_meteor() {
    let mut world = fresh_world();
    world.add_meteor(parked_meteor(&world, Vec2::new(20.0, 20.0)));
    world.add_meteor(parked_meteor(&world, Vec2::new(30.0, 30.0)));
    world.add_bullet(parked_bullet(&world, Vec2::new(45.0, 45.0)));

    assert_eq!(world.resolve_bullet_hits(), 1);
    assert_eq!(world.score(), 1);
    assert!(world.bullets().is_empty());
    // The first meteor in spawn order takes the hit
    assert_eq!(world.meteors().len(), 1);
    assert_relative_eq!(world.meteors()[0].position(), Vec2::new(30.0, 30.0));
}

#[test]
fn test_each_pair_scores_once() {
    let mut world = fresh_world();
    world.add_meteor(parked_meteor(&world, Vec2::new(20.0, 20.0)));
    world.add_meteor(parked_meteor(&world, Vec2::new(600.0, 20.0)));
    world.add_meteor(parked_meteor(&world, Vec2::new(20.0, 450.0)));
    world.add_bullet(parked_bullet(&world, Vec2::new(620.0, 40.0)));
    world.add_bullet(parked_bullet(&world, Vec2::new(40.0, 40.0)));
    world.add_bullet(parked_bullet(&world, Vec2::new(45.0, 45.0)));

    assert_eq!(world.resolve_bullet_hits(), 2);
    assert_eq!(world.score(), 2);

    // The untouched meteor and the spare bullet survive in order
    assert_eq!(world.meteors().len(), 1);
    assert_relative_eq!(world.meteors()[0].position(), Vec2::new(20.0, 450.0));
    assert_eq!(world.bullets().len(), 1);
    assert_relative_eq!(world.bullets()[0].center(), Vec2::new(45.0, 45.0));
}

#[test]
fn test_meteor_on_player_resets_world() {
    let mut world = fresh_world();
    for _ in 0..10 {
        world.update(Controls::ROTATE_LEFT);
    }
    world.add_bullet(parked_bullet(&world, Vec2::new(100.0, 100.0)));
    world.add_meteor(parked_meteor(&world, Vec2::new(700.0, 500.0)));
    let start = world.player().position();
    world.add_meteor(parked_meteor(&world, start));

    world.update(Controls::empty());

    assert_fresh_state(&world);
    // The spawn countdown is not restarted by a reset
    assert_eq!(world.spawn_timer().elapsed_ticks(), 11);
}

#[test]
fn test_reset_restores_canonical_state() {
    let mut config = GameConfig::default();
    config.gameplay.meteor_spawn_interval_ms = 500;
    let mut world = world_with(&config);

    for _ in 0..200 {
        world.update(Controls::ROTATE_RIGHT | Controls::FIRE);
    }
    world.add_meteor(parked_meteor(&world, Vec2::new(20.0, 20.0)));
    world.add_bullet(parked_bullet(&world, Vec2::new(40.0, 40.0)));
    world.resolve_bullet_hits();
    assert!(world.score() > 0);

    world.reset();
    assert_fresh_state(&world);
}

#[test]
fn test_holding_fire_shoots_once_per_cooldown() {
    let mut config = GameConfig::default();
    config.gameplay.cull_offscreen_bullets = false;
    let mut world = world_with(&config);
    let cooldown = world.player().fire_cooldown().target_ticks();
    assert_eq!(cooldown, 60);

    let mut fired_at = Vec::new();
    for tick in 1..=3 * cooldown + 30 {
        let before = world.bullets().len();
        world.update(Controls::FIRE);
        if world.bullets().len() > before {
            fired_at.push(tick);
        }
    }

    assert_eq!(fired_at, vec![60, 120, 180]);
    assert_eq!(world.bullets().len(), 3);
}

#[test]
fn test_offscreen_bullets_are_culled() {
    let mut world = fresh_world();
    world.add_bullet(parked_bullet(&world, Vec2::new(400.0, 30.0)));
    world.add_bullet(rising_bullet(&world));

    // The parked bullet stays; the moving one leaves through the top
    for _ in 0..40 {
        world.update(Controls::empty());
    }
    assert_eq!(world.bullets().len(), 1);
    assert_relative_eq!(world.bullets()[0].center(), Vec2::new(400.0, 30.0));
}

#[test]
fn test_offscreen_bullets_kept_when_culling_disabled() {
    let mut config = GameConfig::default();
    config.gameplay.cull_offscreen_bullets = false;
    let mut world = world_with(&config);
    world.add_bullet(rising_bullet(&world));

    for _ in 0..100 {
        world.update(Controls::empty());
    }
    assert_eq!(world.bullets().len(), 1);
    assert!(world.bullets()[0].collider().max_y() < 0.0);
}

#[test]
fn test_draw_order_and_score_text() {
    let mut world = fresh_world();
    world.add_meteor(parked_meteor(&world, Vec2::new(20.0, 20.0)));
    let tiny = world.assets().meteors[3].clone();
    world.add_meteor(Meteor::new(Vec2::new(700.0, 20.0), Vec2::zeros(), 0.0, tiny));
    world.add_bullet(parked_bullet(&world, Vec2::new(400.0, 100.0)));

    let mut surface = RecordingSurface::new();
    world.draw(&mut surface);

    assert_eq!(surface.images(), vec!["player", "meteor_big", "meteor_tiny", "laser"]);
    assert_eq!(surface.texts(), vec!["000000"]);
    assert_eq!(surface.len(), 5);

    let Some(DrawCommand::Text { position, .. }) = surface.commands().last() else {
        panic!("score must be drawn last");
    };
    assert_relative_eq!(*position, Vec2::new(300.0, 50.0));
    assert_relative_eq!(surface.commands()[0].origin(), world.player().position(), epsilon = 1e-9);
}
