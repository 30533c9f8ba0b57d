use levelgrid::color::Color;
use levelgrid::particles::*;
use levelgrid::render::{DrawCommand, DrawList};

#[test]
fn create_is_empty_pool() {
    let p = ParticleSystem::create(16.0, 32);
    assert!(p.is_empty());
    assert_eq!(p.capacity(), 32);
    assert_eq!(p.size(), 16.0);
}

#[test]
fn pseudo_rand_in_unit_interval() {
    for seed in 0..1000u64 {
        let r = pseudo_rand(seed);
        assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
    }
}

#[test]
fn emit_spawns_at_point() {
    let mut p = ParticleSystem::create(16.0, 32);
    p.emit(100.0, 50.0, 10);
    assert_eq!(p.len(), 10);
    assert!(p.iter().all(|q| q.pos.x == 100.0 && q.pos.y == 50.0));
    assert!(p.iter().all(|q| q.life_fraction() == 1.0));
}

#[test]
fn emit_never_exceeds_capacity() {
    let mut p = ParticleSystem::create(16.0, 8);
    p.emit(0.0, 0.0, 5);
    p.emit(0.0, 0.0, 5);
    assert_eq!(p.len(), 8);
    p.emit(0.0, 0.0, 100);
    assert_eq!(p.len(), 8);
}

#[test]
fn zero_capacity_pool_stays_empty() {
    let mut p = ParticleSystem::create(16.0, 0);
    p.emit(0.0, 0.0, 10);
    assert!(p.is_empty());
}

#[test]
fn advance_moves_and_ages() {
    let mut p = ParticleSystem::create(16.0, 32);
    p.emit(100.0, 100.0, 4);
    p.advance(0.05);
    assert!(p.iter().all(|q| q.pos.x != 100.0 || q.pos.y != 100.0));
    assert!(p.iter().all(|q| q.life_fraction() < 1.0));
}

#[test]
fn advance_culls_expired_particles() {
    let mut p = ParticleSystem::create(16.0, 32);
    p.emit(0.0, 0.0, 20);
    // Longest possible life is under one second.
    for _ in 0..120 {
        p.advance(1.0 / 60.0);
    }
    assert!(p.is_empty());
}

#[test]
fn draw_emits_one_quad_per_particle() {
    let mut p = ParticleSystem::create(16.0, 32);
    p.emit(10.0, 10.0, 6);
    let mut list = DrawList::new();
    p.draw(&mut list, Color::LIGHT_GREEN);
    assert_eq!(list.len(), 6);
    for cmd in &list.commands {
        match cmd {
            DrawCommand::Rect { rect, .. } => {
                assert_eq!(rect.w, 16.0);
                assert_eq!((rect.x, rect.y), (2.0, 2.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

#[test]
fn clear_empties_pool() {
    let mut p = ParticleSystem::create(16.0, 32);
    p.emit(0.0, 0.0, 6);
    p.clear();
    assert!(p.is_empty());
}
