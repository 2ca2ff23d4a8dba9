use orrery::simulation::states::{Body, BodyRole, NVec2, System};
use orrery::simulation::params::Parameters;
use orrery::simulation::forces::{AccelSet, CentralGravity};
use orrery::simulation::integrator::euler_integrator;
use orrery::simulation::scenario::Scenario;
use orrery::configuration::config::{named_color, ScenarioConfig};
use orrery::visualization::vis2d::{format_time_readout, view_scale};

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Build an attractor at the origin plus one orbiter at distance `dist` on
/// the +x axis, started at the circular-orbit speed along -y
pub fn central_system(dist: f64, g: f64, attractor_mass: f64, orbiter_mass: f64) -> System {
    let attractor = Body::new(
        NVec2::zeros(),
        attractor_mass,
        WHITE,
        "Star",
        NVec2::zeros(),
        BodyRole::Attractor,
    );
    let speed = (g * attractor_mass / dist).sqrt();
    let orbiter = Body::new(
        NVec2::new(dist, 0.0),
        orbiter_mass,
        WHITE,
        "Planet",
        NVec2::new(0.0, -speed),
        BodyRole::Orbiter,
    );
    System {
        bodies: vec![attractor, orbiter],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        dt: 0.1,
        G: 0.1,
        year_length: 232.7,
    }
}

/// Build a central-gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(CentralGravity { G: p.G })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_points_toward_attractor() {
    let sys = central_system(140.0, 0.1, 20000.0, 6.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let toward = sys.bodies[0].x - sys.bodies[1].x;
    assert!(toward.norm() > 0.0);
    assert!(
        acc[1].dot(&toward) > 0.0,
        "Acceleration is not toward the attractor"
    );
}

#[test]
fn gravity_leaves_attractor_untouched() {
    let sys = central_system(140.0, 0.1, 20000.0, 6.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // One-directional force model: no reciprocal pull on the attractor
    assert_eq!(acc[0], NVec2::zeros());
}

#[test]
fn circular_init_centripetal_magnitude() {
    let dist = 140.0;
    let p = test_params();
    let sys = central_system(dist, p.G, 20000.0, 6.0);
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // At the circular-orbit speed, |a| == v^2 / d at t = 0
    let v = sys.bodies[1].v.norm();
    let expected = v * v / dist;
    let got = acc[1].norm();

    assert!(
        (got - expected).abs() < 1e-12,
        "Expected centripetal |a| {expected}, got {got}"
    );
}

// ==================================================================================
// Body model tests
// ==================================================================================

#[test]
fn radius_derived_from_mass() {
    for m in [1.0, 5.0, 6.0, 130.0, 20000.0] {
        let b = Body::new(NVec2::zeros(), m, WHITE, "b", NVec2::zeros(), BodyRole::Orbiter);
        assert_eq!(b.radius, m.ln() * 1.5);
    }
}

#[test]
fn prev_position_tracks_last_step() {
    let p = test_params();
    let mut sys = central_system(60.0, p.G, 20000.0, 1.0);
    let forces = gravity_set(&p);

    let x0 = sys.bodies[1].x;
    euler_integrator(&mut sys, &forces, &p);
    // The segment drawn this frame runs from x0 to the new position
    assert_eq!(sys.bodies[1].prev_x, x0);
    assert_ne!(sys.bodies[1].prev_x, sys.bodies[1].x);

    let x1 = sys.bodies[1].x;
    euler_integrator(&mut sys, &forces, &p);
    assert_eq!(sys.bodies[1].prev_x, x1);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn earth_equivalent_initial_speed_and_step() {
    let p = test_params();
    let mut sys = central_system(140.0, p.G, 20000.0, 6.0);
    let forces = gravity_set(&p);

    // sqrt(0.1 * 20000 / 140)
    let speed = sys.bodies[1].v.norm();
    assert!(
        (speed - 3.7796).abs() < 1e-3,
        "Expected ~3.7796, got {speed}"
    );

    // The body sits on the +x axis, so the first kick is purely radial:
    // the tangential (-y) velocity component keeps its sign
    euler_integrator(&mut sys, &forces, &p);
    assert!(sys.bodies[1].v.y < 0.0);
    assert!(sys.bodies[1].v.x < 0.0, "Expected an inward kick along -x");
}

#[test]
fn attractor_never_moves() {
    let p = test_params();
    let mut sys = central_system(140.0, p.G, 20000.0, 6.0);
    let forces = gravity_set(&p);

    for _ in 0..1000 {
        euler_integrator(&mut sys, &forces, &p);
    }

    assert_eq!(sys.bodies[0].x, NVec2::zeros());
    assert_eq!(sys.bodies[0].v, NVec2::zeros());
}

#[test]
fn clock_accumulates_fixed_steps() {
    let p = test_params();
    let mut sys = central_system(60.0, p.G, 20000.0, 1.0);
    let forces = gravity_set(&p);

    for _ in 0..50 {
        euler_integrator(&mut sys, &forces, &p);
    }

    assert!((sys.t - 5.0).abs() < 1e-9);
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn solar_system_setup() {
    let scenario = Scenario::build_scenario(ScenarioConfig::solar_system());
    let sys = &scenario.system;

    assert_eq!(sys.bodies.len(), 9);
    assert_eq!(sys.attractor_index(), Some(0));
    assert_eq!(sys.bodies[0].name, "Sun");
    assert_eq!(sys.bodies[0].m, 20000.0);
    assert_eq!(sys.bodies[0].v, NVec2::zeros());

    let expected = [
        ("Mercury", 60.0, 1.0),
        ("Venus", 90.0, 5.0),
        ("Earth", 140.0, 6.0),
        ("Mars", 200.0, 3.0),
        ("Jupiter", 350.0, 600.0),
        ("Saturn", 500.0, 450.0),
        ("Uranus", 650.0, 150.0),
        ("Neptune", 750.0, 130.0),
    ];
    for (body, (name, dist, mass)) in sys.bodies[1..].iter().zip(expected) {
        assert_eq!(body.name, name);
        assert_eq!(body.x, NVec2::new(dist, 0.0));
        assert_eq!(body.m, mass);
        assert_eq!(body.role, BodyRole::Orbiter);

        // Tangential circular-orbit start, common direction
        let speed = (scenario.parameters.G * 20000.0 / dist).sqrt();
        assert_eq!(body.v, NVec2::new(0.0, -speed));
    }
}

#[test]
fn scenario_step_matches_integrator() {
    let mut scenario = Scenario::build_scenario(ScenarioConfig::solar_system());
    let mut sys = scenario.system.clone();
    let forces = gravity_set(&scenario.parameters);

    scenario.step();
    euler_integrator(&mut sys, &forces, &scenario.parameters);

    assert_eq!(scenario.system.t, sys.t);
    for (a, b) in scenario.system.bodies.iter().zip(sys.bodies.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.v, b.v);
    }
}

#[test]
fn scenario_config_parses_from_yaml() {
    let yaml = r#"
attractor:
  name: Sol
  color: yellow
  mass: 10000.0

orbiters:
  - name: Terra
    color: blue
    distance: 100.0
    mass: 2.0

parameters: {}
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

    // Omitted parameters fall back to the canonical constants
    assert_eq!(cfg.parameters.dt, 0.1);
    assert_eq!(cfg.parameters.G, 0.1);
    assert_eq!(cfg.parameters.year_length, 232.7);
    assert_eq!(cfg.parameters.star_count, 500);

    assert_eq!(cfg.attractor.name, "Sol");
    assert_eq!(cfg.orbiters.len(), 1);
    assert_eq!(cfg.orbiters[0].distance, 100.0);
}

#[test]
fn color_names_resolve() {
    assert_eq!(named_color("yellow"), [1.0, 1.0, 0.0]);
    assert_eq!(named_color("blue"), [0.0, 0.0, 1.0]);
    // Unknown names fall back to white
    assert_eq!(named_color("octarine"), [1.0, 1.0, 1.0]);
}

// ==================================================================================
// Readout / view transform tests
// ==================================================================================

#[test]
fn time_readout_after_fixed_steps() {
    let mut scenario = Scenario::build_scenario(ScenarioConfig::solar_system());
    for _ in 0..50 {
        scenario.step();
    }

    let readout = format_time_readout(scenario.system.t, scenario.parameters.year_length);
    assert_eq!(readout, "Time: 0.02 Earth Years");
}

#[test]
fn view_scale_fits_outermost_orbit() {
    let scenario = Scenario::build_scenario(ScenarioConfig::solar_system());
    let max_extent = scenario.system.max_extent();

    // Neptune's distance plus its display radius
    let neptune = &scenario.system.bodies[8];
    assert_eq!(max_extent, 750.0 + neptune.radius);

    let scale = view_scale(1920.0, 1080.0, max_extent as f32);
    assert_eq!(scale, 1080.0 / (2.0 * max_extent as f32 * 1.05));

    // The outermost body lands inside the smaller half-dimension
    assert!(max_extent as f32 * scale <= 540.0);
}
