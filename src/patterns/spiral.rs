use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

use super::{ParamRange, PatternGenerator, DEFAULT_MAX_STEPS};
use crate::errors::{require_finite, GenError};
use crate::geo_types::{Path, PointDistance};
use geo_types::{coord, Coord, LineString, Point};

/// Archimedean-style spiral growing outward from a start point until its
/// radius reaches `max_radius`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpiralConfig {
    pub start_x: f64,
    pub start_y: f64,
    /// Radius at `start_theta`; 0 starts on the center point.
    pub start_radius: f64,
    /// Radians in 0..2PI, 0 along +X, counter-clockwise.
    pub start_theta: f64,
    /// Radial growth per full turn.
    pub offset: f64,
    /// Samples per turn. Must be greater than 3.
    pub sides: u32,
    /// Multiplies theta before the trig, twisting the spiral.
    pub twist: f64,
    /// Usually half the smaller plotter extent, supplied by the caller.
    pub max_radius: f64,
    pub max_steps: usize,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        SpiralConfig {
            start_x: 0.0,
            start_y: 0.0,
            start_radius: 0.0,
            start_theta: 0.0,
            offset: 5.0,
            sides: 20,
            twist: 1.0,
            max_radius: 100.0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

pub const SPIRAL_PARAMS: &[ParamRange] = &[
    ParamRange::new("start_radius", "Start Radius", 0.0, 100.0, 1.0, 0.0),
    ParamRange::new("start_theta", "Start Angle", 0.0, 2.0 * PI, 0.01, 0.0),
    ParamRange::new("offset", "Offset", 0.1, 20.0, 0.1, 5.0),
    ParamRange::new("sides", "Sides", 4.0, 60.0, 1.0, 20.0),
    ParamRange::new("twist", "Twist", 0.9, 1.1, 0.001, 1.0),
];

impl SpiralConfig {
    fn check(&self) -> Result<(), GenError> {
        require_finite("start_x", self.start_x)?;
        require_finite("start_y", self.start_y)?;
        require_finite("start_theta", self.start_theta)?;
        require_finite("twist", self.twist)?;
        require_finite("max_radius", self.max_radius)?;
        if self.sides <= 3 {
            return Err(GenError::invalid("sides", "must be greater than 3"));
        }
        if require_finite("start_radius", self.start_radius)? >= self.max_radius {
            return Err(GenError::invalid(
                "start_radius",
                format!("starts outside max_radius {}", self.max_radius),
            ));
        }
        if !(self.offset.is_finite() && self.offset > 0.0) {
            warn!(offset = self.offset, "spiral radius would never reach max_radius");
            return Err(GenError::NonTerminating(format!(
                "offset must be positive, got {}",
                self.offset
            )));
        }
        Ok(())
    }

    fn point_at(&self, step: usize) -> (Coord<f64>, f64) {
        let theta = self.start_theta + (step as f64 / self.sides as f64) * 2.0 * PI;
        let radius = self.start_radius + self.offset * (theta / (2.0 * PI));
        let point = coord! {
            x: self.start_x + radius * (theta * self.twist).cos(),
            y: self.start_y + radius * (theta * self.twist).sin(),
        };
        (point, radius)
    }

    /// Returns the path and the total distance traced along it.
    pub fn generate(&self) -> Result<(Path, f64), GenError> {
        self.check()?;
        let mut points: Vec<Coord<f64>> = vec![];
        let mut distance = 0.0;
        let mut radius = self.start_radius;
        let mut step = 0usize;
        while radius < self.max_radius {
            if step >= self.max_steps {
                warn!(max_steps = self.max_steps, radius, "spiral step cap");
                return Err(GenError::NonTerminating(format!(
                    "spiral did not reach radius {} within {} steps",
                    self.max_radius, self.max_steps
                )));
            }
            let (point, r) = self.point_at(step);
            if let Some(prev) = points.last() {
                distance += Point::from(point).distance(&Point::from(*prev));
            }
            points.push(point);
            radius = r;
            step += 1;
        }
        debug!(points = points.len(), distance, "spiral");
        Ok((LineString::new(points), distance))
    }
}

impl PatternGenerator for SpiralConfig {
    fn key(&self) -> &'static str {
        "spiral"
    }

    fn generate_path(&self) -> Result<Path, GenError> {
        self.generate().map(|(path, _)| path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_types::PathLength;
    use num_traits::abs;

    #[test]
    fn test_radius_is_monotonic() {
        let cfg = SpiralConfig {
            start_x: 12.0,
            start_y: -4.0,
            ..Default::default()
        };
        let (path, _) = cfg.generate().unwrap();
        let radii: Vec<f64> = path
            .coords()
            .map(|c| ((c.x - 12.0).powi(2) + (c.y + 4.0).powi(2)).sqrt())
            .collect();
        for pair in radii.windows(2) {
            assert!(pair[1] + 1e-9 >= pair[0]);
        }
        assert!(path.0.len() < (100 / 5) * 20 + 20);
        // The loop stops on the first point at or past max_radius.
        assert!(*radii.last().unwrap() >= 100.0 - 1e-9);
        assert!(radii[radii.len() - 2] < 100.0);
    }

    #[test]
    fn test_point_count() {
        // radius = 0.25 * step, so steps 0..=400 are emitted.
        let (path, _) = SpiralConfig::default().generate().unwrap();
        assert_eq!(path.0.len(), 401);
    }

    #[test]
    fn test_distance_matches_path_length() {
        let cfg = SpiralConfig {
            twist: 1.02,
            start_theta: 0.5,
            ..Default::default()
        };
        let (path, distance) = cfg.generate().unwrap();
        assert!(distance > 0.0);
        assert!(abs(distance - path.path_length()) < 1e-6);
    }

    #[test]
    fn test_first_point_on_start_angle() {
        let cfg = SpiralConfig {
            start_radius: 10.0,
            start_theta: PI / 2.0,
            ..Default::default()
        };
        let (path, _) = cfg.generate().unwrap();
        let first = path.0[0];
        // start_radius plus a quarter turn of offset
        assert!(abs(first.x) < 1e-9);
        assert!(abs(first.y - 11.25) < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let cfg = SpiralConfig {
            start_x: 3.5,
            start_theta: 1.2,
            offset: 2.5,
            sides: 7,
            twist: 1.03,
            ..Default::default()
        };
        let (first, first_len) = cfg.generate().unwrap();
        let (second, second_len) = cfg.generate().unwrap();
        assert_eq!(first, second);
        assert_eq!(first_len.to_bits(), second_len.to_bits());
    }

    #[test]
    fn test_non_positive_offset() {
        for offset in [0.0, -1.0, f64::NAN] {
            let cfg = SpiralConfig {
                offset,
                ..Default::default()
            };
            assert!(matches!(cfg.generate(), Err(GenError::NonTerminating(_))));
        }
    }

    #[test]
    fn test_step_cap() {
        let cfg = SpiralConfig {
            offset: 0.001,
            max_steps: 500,
            ..Default::default()
        };
        assert!(matches!(cfg.generate(), Err(GenError::NonTerminating(_))));
    }

    #[test]
    fn test_too_few_sides() {
        let cfg = SpiralConfig {
            sides: 3,
            ..Default::default()
        };
        assert!(matches!(
            cfg.generate(),
            Err(GenError::InvalidParameter { name: "sides", .. })
        ));
    }

    #[test]
    fn test_start_outside_bound() {
        let cfg = SpiralConfig {
            start_radius: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.generate(),
            Err(GenError::InvalidParameter { name: "start_radius", .. })
        ));
    }
}
