// Host-side tests for the particle field simulation and painting order.

use backdrop_core::constants::WRAP_MARGIN;
use backdrop_core::physics::{relax, wrap};
use backdrop_core::*;
use glam::Vec2;

fn viewport(w: f32, h: f32) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[derive(Default)]
struct Recorder {
    clears: usize,
    ops: Vec<Op>,
}

#[derive(Debug, PartialEq)]
enum Op {
    Halo(Halo),
    Disc(Disc),
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.clears += 1;
        self.ops.clear();
    }
    fn fill_halo(&mut self, halo: &Halo) {
        self.ops.push(Op::Halo(halo.clone()));
    }
    fn fill_disc(&mut self, disc: &Disc) {
        self.ops.push(Op::Disc(disc.clone()));
    }
}

fn single_particle_field(particle: Particle, vp: Viewport) -> ParticleField {
    let cfg = FieldConfig {
        particle_count: 1,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::with_config(cfg, vp, 0.0, 1).unwrap();
    field.particles_mut()[0] = particle;
    field
}

#[test]
fn population_size_follows_preset() {
    let narrow = ParticleField::with_seed(viewport(400.0, 800.0), 0.0, 7);
    assert_eq!(narrow.preset(), Some(Preset::Compact));
    assert_eq!(narrow.particles().len(), 300);

    let wide = ParticleField::with_seed(viewport(1280.0, 800.0), 0.0, 7);
    assert_eq!(wide.preset(), Some(Preset::Full));
    assert_eq!(wide.particles().len(), 500);
}

#[test]
fn seeding_stays_inside_visible_band_and_ranges() {
    let field = ParticleField::with_seed(viewport(1024.0, 700.0), 1500.0, 3);
    for p in field.particles() {
        assert!((0.0..1024.0).contains(&p.position.x));
        assert!((1500.0..2200.0).contains(&p.position.y));
        assert!((1.0..3.0).contains(&p.base_radius));
        assert!((0.3..0.9).contains(&p.alpha));
        assert!(p.base_velocity.x.abs() <= 0.4 && p.base_velocity.y.abs() <= 0.4);
        assert_eq!(p.velocity, p.base_velocity);
        assert!(PALETTE.contains(&p.color));
    }
}

#[test]
fn same_seed_gives_same_population() {
    let a = ParticleField::with_seed(viewport(900.0, 600.0), 0.0, 99);
    let b = ParticleField::with_seed(viewport(900.0, 600.0), 0.0, 99);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn one_pointer_free_tick_moves_by_initial_velocity() {
    let cfg = FieldConfig {
        particle_count: 300,
        ..Preset::Compact.config()
    };
    let mut field = ParticleField::with_config(cfg, viewport(600.0, 900.0), 0.0, 2024).unwrap();
    let before: Vec<Particle> = field.particles().to_vec();
    field.step(&FrameInput::default());
    assert_eq!(field.particles().len(), 300);
    for (old, new) in before.iter().zip(field.particles()) {
        assert_eq!(new.position, old.position + old.velocity);
    }
}

#[test]
fn speed_never_exceeds_max_under_constant_pull() {
    let mut field = ParticleField::with_seed(viewport(1200.0, 800.0), 0.0, 5);
    let max = field.config().max_speed;
    let input = FrameInput {
        scroll_y: 0.0,
        pointer: Some(Vec2::new(600.0, 400.0)),
    };
    for _ in 0..400 {
        field.step(&input);
        for p in field.particles() {
            assert!(p.velocity.length() <= max + 1e-4);
        }
    }
}

#[test]
fn positions_stay_in_wrapped_band_for_any_scroll() {
    let mut field = ParticleField::with_seed(viewport(800.0, 600.0), 0.0, 11);
    for p in field.particles_mut() {
        p.velocity = Vec2::new(1.9, -1.7);
        p.base_velocity = p.velocity;
    }
    let mut scroll = 0.0;
    for tick in 0..600 {
        if tick % 50 == 0 {
            scroll += 977.0;
        }
        field.step(&FrameInput {
            scroll_y: scroll,
            pointer: None,
        });
        for p in field.particles() {
            assert!(p.position.x >= -WRAP_MARGIN && p.position.x <= 800.0 + WRAP_MARGIN);
            assert!(p.position.y >= scroll - WRAP_MARGIN);
            assert!(p.position.y <= scroll + 600.0 + WRAP_MARGIN);
        }
    }
}

#[test]
fn left_exit_wraps_to_right_margin() {
    let p = wrap(Vec2::new(-60.0, 100.0), 800.0, 0.0, 600.0, 50.0);
    assert_eq!(p, Vec2::new(850.0, 100.0));
    let p = wrap(Vec2::new(851.0, 100.0), 800.0, 0.0, 600.0, 50.0);
    assert_eq!(p.x, -50.0);
}

#[test]
fn vertical_wrap_follows_scroll_window() {
    let p = wrap(Vec2::new(10.0, 1949.0), 800.0, 2000.0, 600.0, 50.0);
    assert_eq!(p.y, 2650.0);
    let p = wrap(Vec2::new(10.0, 2651.0), 800.0, 2000.0, 600.0, 50.0);
    assert_eq!(p.y, 1950.0);
}

#[test]
fn zero_distance_pointer_relaxes_instead_of_nan() {
    let vp = viewport(800.0, 600.0);
    let start = Vec2::new(400.0, 300.0);
    let velocity = Vec2::new(1.0, -0.5);
    let base = Vec2::new(0.1, 0.1);
    let mut particle = Particle::new(start, base, 2.0, PALETTE[0], 0.5);
    particle.velocity = velocity;
    let mut field = single_particle_field(particle, vp);

    field.step(&FrameInput {
        scroll_y: 0.0,
        pointer: Some(start),
    });

    let p = &field.particles()[0];
    assert!(p.velocity.is_finite() && p.position.is_finite());
    assert_eq!(p.velocity, relax(velocity, base));
}

#[test]
fn relaxation_is_monotone_without_pointer() {
    let vp = viewport(800.0, 600.0);
    let base = Vec2::new(0.2, -0.1);
    let mut particle = Particle::new(Vec2::new(400.0, 300.0), base, 2.0, PALETTE[1], 0.5);
    particle.velocity = Vec2::new(-1.4, 1.3);
    let mut field = single_particle_field(particle, vp);

    let mut gap = (field.particles()[0].velocity - base).length();
    for _ in 0..300 {
        field.step(&FrameInput::default());
        let next = (field.particles()[0].velocity - base).length();
        assert!(next <= gap + 1e-6);
        gap = next;
    }
    assert!(gap < 0.01);
}

#[test]
fn pointer_in_range_pulls_particle_closer() {
    let vp = viewport(800.0, 600.0);
    let particle = Particle::new(Vec2::new(300.0, 300.0), Vec2::ZERO, 2.0, PALETTE[2], 0.5);
    let mut field = single_particle_field(particle, vp);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..10 {
        field.step(&FrameInput {
            scroll_y: 0.0,
            pointer: Some(pointer),
        });
    }
    let p = &field.particles()[0];
    assert!(p.velocity.x > 0.0);
    assert!(p.position.distance(pointer) < 100.0);
}

#[test]
fn pointer_is_converted_with_scroll() {
    // Particle at document y=1300 with scroll 1000 sits at viewport y=300.
    let vp = viewport(800.0, 600.0);
    let particle = Particle::new(Vec2::new(300.0, 1300.0), Vec2::ZERO, 2.0, PALETTE[0], 0.5);
    let mut field = single_particle_field(particle, vp);
    let mut tracker = PointerTracker::default();
    tracker.mouse_move(Vec2::new(350.0, 300.0));
    let input = FrameInput {
        scroll_y: 1000.0,
        pointer: tracker.document_position(1000.0),
    };
    field.step(&input);
    let p = &field.particles()[0];
    assert!(p.velocity.x > 0.0);
    assert!(p.velocity.y.abs() < 1e-6);
}

#[test]
fn frame_paints_halo_beneath_disc_near_pointer() {
    let vp = viewport(800.0, 600.0);
    let particle = Particle::new(Vec2::new(400.0, 1300.0), Vec2::ZERO, 2.0, PALETTE[3], 0.5);
    let mut field = single_particle_field(particle, vp);
    let mut surface = Recorder::default();
    let input = FrameInput {
        scroll_y: 1000.0,
        pointer: Some(Vec2::new(400.0, 1300.0)),
    };
    let stats = field.frame(&input, &mut surface);

    assert_eq!(surface.clears, 1);
    assert_eq!(
        stats,
        FieldStats {
            updated: 1,
            drawn: 1,
            haloed: 1
        }
    );
    let p = &field.particles()[0];
    match (&surface.ops[0], &surface.ops[1]) {
        (Op::Halo(h), Op::Disc(d)) => {
            assert_eq!(d.center, Vec2::new(p.position.x, p.position.y - 1000.0));
            assert!(d.radius > p.base_radius && d.radius <= p.base_radius * 4.0);
            assert!((h.radius - d.radius * 2.5).abs() < 1e-4);
            assert!(d.alpha <= 1.0 && d.alpha > 0.5);
            assert_eq!(h.alpha, d.alpha);
        }
        other => panic!("unexpected paint order {:?}", other),
    }
}

#[test]
fn drawn_radius_is_rederived_each_frame() {
    let vp = viewport(800.0, 600.0);
    let particle = Particle::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 2.0, PALETTE[0], 0.5);
    let mut field = single_particle_field(particle, vp);
    let mut surface = Recorder::default();
    let near = FrameInput {
        scroll_y: 0.0,
        pointer: Some(Vec2::new(400.0, 300.0)),
    };
    for _ in 0..5 {
        field.frame(&near, &mut surface);
    }
    assert!(field.particles()[0].radius <= 2.0 * 4.0);

    field.frame(&FrameInput::default(), &mut surface);
    assert_eq!(field.particles()[0].radius, 2.0);
    assert_eq!(
        surface.ops,
        vec![Op::Disc(Disc {
            center: field.particles()[0].position,
            radius: 2.0,
            color: PALETTE[0],
            alpha: 0.5,
        })]
    );
}

#[test]
fn frame_updates_every_particle_without_pointer() {
    let vp = viewport(800.0, 600.0);
    let mut field = ParticleField::with_seed(vp, 0.0, 8);
    let mut surface = Recorder::default();
    let stats = field.frame(&FrameInput::default(), &mut surface);
    assert_eq!(stats.updated, field.particles().len());
    assert_eq!(stats.drawn, stats.updated);
    assert_eq!(stats.haloed, 0);
    assert_eq!(surface.ops.len(), stats.drawn);
}

#[test]
fn resize_reseeds_only_across_breakpoint() {
    let mut field = ParticleField::with_seed(viewport(1280.0, 800.0), 0.0, 1);
    let before = field.particles().to_vec();

    assert!(!field.resize(viewport(1000.0, 700.0), 0.0));
    assert_eq!(field.particles(), &before[..]);
    assert_eq!(field.viewport(), viewport(1000.0, 700.0));

    assert!(field.resize(viewport(500.0, 700.0), 0.0));
    assert_eq!(field.preset(), Some(Preset::Compact));
    assert_eq!(field.particles().len(), 300);
    for p in field.particles() {
        assert!(p.position.x < 500.0);
    }
}

#[test]
fn custom_config_is_validated_and_never_swapped() {
    let bad = FieldConfig {
        particle_count: 0,
        ..FieldConfig::default()
    };
    assert_eq!(
        ParticleField::with_config(bad, viewport(800.0, 600.0), 0.0, 0).err(),
        Some(ConfigError::EmptyPopulation)
    );

    let cfg = FieldConfig {
        particle_count: 42,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::with_config(cfg, viewport(800.0, 600.0), 0.0, 0).unwrap();
    assert!(!field.resize(viewport(320.0, 600.0), 0.0));
    assert_eq!(field.particles().len(), 42);
    assert_eq!(field.preset(), None);
}
