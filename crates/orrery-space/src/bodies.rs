//! Per-body parameters and the orbital distances derived from them.
//!
//! Body 0 is the central body. Every other body sits just outside the
//! central body's surface, pushed out by its own gap, its own radius, and a
//! fixed visual clearance. Distances are display distances, not
//! astronomical ones.

/// Extra spacing added to every orbital distance so bodies never touch the
/// central body.
pub const DEFAULT_CLEARANCE: f64 = 25.0;

/// One entry of the body table.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Display name.
    pub name: String,
    /// Body radius in scene units.
    pub radius: f64,
    /// Gap between the central body's surface and this body.
    pub gap: f64,
    /// Fixed clearance added on top of the gap.
    pub clearance: f64,
    /// Uniform scale applied to the body's model matrix.
    pub scale: f32,
}

impl CelestialBody {
    /// Create a body with the default clearance.
    pub fn new(name: impl Into<String>, radius: f64, gap: f64, scale: f32) -> Self {
        Self {
            name: name.into(),
            radius,
            gap,
            clearance: DEFAULT_CLEARANCE,
            scale,
        }
    }

    /// Create the central body. It has no orbit and is never scaled.
    pub fn central(name: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            radius,
            gap: 0.0,
            clearance: 0.0,
            scale: 1.0,
        }
    }
}

/// Ordered table of bodies; index 0 is the central body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyTable {
    bodies: Vec<CelestialBody>,
}

impl BodyTable {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }

    /// The Sun and the eight planets, with gaps and scales tuned for a
    /// compact display.
    pub fn solar_system() -> Self {
        Self::new(vec![
            CelestialBody::central("Sun", 69.6340),
            CelestialBody::new("Mercury", 0.24397, 3.5, 0.009503),
            CelestialBody::new("Venus", 0.60518, 6.7, 0.0146908),
            CelestialBody::new("Earth", 0.6371, 9.3, 0.0151492),
            CelestialBody::new("Mars", 0.33895, 14.2, 0.010867),
            CelestialBody::new("Jupiter", 6.9911, 48.4, 0.103988),
            CelestialBody::new("Saturn", 5.8232, 88.9, 0.08362581),
            CelestialBody::new("Uranus", 2.5362, 179.0, 0.036421),
            CelestialBody::new("Neptune", 2.4622, 288.0, 0.035359),
        ])
    }

    pub fn central(&self) -> Option<&CelestialBody> {
        self.bodies.first()
    }

    pub fn get(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialBody> {
        self.bodies.iter()
    }

    /// Orbital distance of body `index` from the origin.
    ///
    /// The central body and unknown indices are at distance 0.
    pub fn distance(&self, index: usize) -> f32 {
        match (index, self.central(), self.bodies.get(index)) {
            (0, _, _) | (_, None, _) | (_, _, None) => 0.0,
            (_, Some(central), Some(body)) => {
                (central.radius + body.gap + body.radius + body.clearance) as f32
            }
        }
    }

    /// Orbital distance for every body, in body order.
    pub fn distances(&self) -> Vec<f32> {
        (0..self.bodies.len()).map(|i| self.distance(i)).collect()
    }

    /// Model scale for every body, in body order. The central body is 1.
    pub fn scales(&self) -> Vec<f32> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| if i == 0 { 1.0 } else { body.scale })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BodyTable {
    type Item = &'a CelestialBody;
    type IntoIter = std::slice::Iter<'a, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

impl FromIterator<CelestialBody> for BodyTable {
    fn from_iter<I: IntoIterator<Item = CelestialBody>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_has_nine_bodies() {
        let table = BodyTable::solar_system();
        assert_eq!(table.len(), 9);
        assert_eq!(table.central().map(|b| b.name.as_str()), Some("Sun"));
        assert_eq!(table.get(3).map(|b| b.name.as_str()), Some("Earth"));
    }

    #[test]
    fn test_central_body_is_at_origin() {
        let table = BodyTable::solar_system();
        assert_eq!(table.distance(0), 0.0);
        assert_eq!(table.distances()[0], 0.0);
        assert_eq!(table.scales()[0], 1.0);
    }

    #[test]
    fn test_distance_is_sum_of_radii_gap_and_clearance() {
        let table = BodyTable::solar_system();
        let expected = (69.6340 + 3.5 + 0.24397 + 25.0) as f32;
        assert_eq!(table.distance(1), expected);

        let jupiter = (69.6340 + 48.4 + 6.9911 + 25.0) as f32;
        assert_eq!(table.distance(5), jupiter);
    }

    #[test]
    fn test_distances_increase_outwards() {
        let distances = BodyTable::solar_system().distances();
        for pair in distances.windows(2) {
            assert!(pair[0] < pair[1], "{distances:?}");
        }
    }

    #[test]
    fn test_every_planet_clears_the_central_body() {
        let table = BodyTable::solar_system();
        let sun = table.central().unwrap().radius as f32;
        for d in &table.distances()[1..] {
            assert!(*d > sun + DEFAULT_CLEARANCE as f32 - 1e-3);
        }
    }

    #[test]
    fn test_unknown_index_and_empty_table() {
        let table = BodyTable::solar_system();
        assert_eq!(table.distance(42), 0.0);

        let empty = BodyTable::default();
        assert!(empty.is_empty());
        assert!(empty.distances().is_empty());
        assert!(empty.scales().is_empty());
        assert_eq!(empty.distance(0), 0.0);
    }

    #[test]
    fn test_scales_follow_table() {
        let table: BodyTable = [
            CelestialBody::central("Star", 10.0),
            CelestialBody::new("A", 1.0, 2.0, 0.5),
            CelestialBody::new("B", 1.0, 4.0, 0.25),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.scales(), vec![1.0, 0.5, 0.25]);
        assert_eq!(table.distances(), vec![0.0, 38.0, 40.0]);
    }
}
