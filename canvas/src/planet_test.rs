#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_planet_is_earth_sized() {
    let planet = Planet::default();
    assert_eq!(planet.represented_radius_km(), 6371.0);
    assert_eq!(planet.sim_radius(), 100.0);
}

#[test]
fn planet_is_centered_on_origin() {
    let planet = Planet::new(1000.0);
    assert_eq!(planet.center(), Point::new(0.0, 0.0));
    let circle = planet.circle();
    assert_eq!((circle.x, circle.y, circle.radius), (0.0, 0.0, 100.0));
}

#[test]
fn set_radius_changes_scale_not_circle() {
    let mut planet = Planet::default();
    planet.set_represented_radius(3000.0);
    assert_eq!(planet.represented_radius_km(), 3000.0);
    assert_eq!(planet.sim_radius(), 100.0);
    assert_eq!(planet.converter().km_per_unit(), 30.0);
}

#[test]
fn converter_follows_latest_radius() {
    let mut planet = Planet::new(6371.0);
    let before = planet.converter();
    planet.set_represented_radius(1737.4);
    let after = planet.converter();
    assert_ne!(before, after);
    assert!((after.km_per_unit() - 17.374).abs() < 1e-12);
}

#[test]
fn label_uses_plain_number() {
    assert_eq!(Planet::new(6371.0).label(), "6371km");
    assert_eq!(Planet::new(1737.4).label(), "1737.4km");
}
