//! Heart curve, drawn as an inward spiral: the radius shrinks a little every
//! step until it reaches zero.
//!
//! See <http://mathworld.wolfram.com/HeartCurve.html>.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

use super::{ParamRange, PatternGenerator, DEFAULT_MAX_STEPS};
use crate::errors::{require_finite, GenError};
use crate::geo_types::{rotate, Path};
use geo_types::{coord, LineString};

/// Steps per lap of t.
pub const STEPS_PER_REVOLUTION: usize = 80;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HeartConfig {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub scale: f64,
    /// Radius lost per step. Must be positive.
    pub shrink: f64,
    /// Extra rotation per step, -1..=1.
    pub twist: f64,
    pub reverse: bool,
    pub max_steps: usize,
}

impl Default for HeartConfig {
    fn default() -> Self {
        HeartConfig {
            a: 16.0,
            b: 13.0,
            c: 5.0,
            d: 2.0,
            e: 1.0,
            scale: 10.0,
            shrink: 0.0003,
            twist: 0.0,
            reverse: false,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

pub const HEART_PARAMS: &[ParamRange] = &[
    ParamRange::new("a", "X cof. a", 1.0, 20.0, 1.0, 16.0),
    ParamRange::new("b", "Y cof. b", 1.0, 20.0, 1.0, 13.0),
    ParamRange::new("c", "Y cof. c", 1.0, 20.0, 1.0, 5.0),
    ParamRange::new("d", "Y cof. d", 1.0, 20.0, 1.0, 2.0),
    ParamRange::new("e", "Y cof. e", 1.0, 20.0, 1.0, 1.0),
    ParamRange::new("scale", "scale", 1.0, 20.0, 0.2, 10.0),
    ParamRange::new("shrink", "shrink", 0.0002, 0.0020, 0.0001, 0.0003),
    ParamRange::new("twist", "Twist", -1.0, 1.0, 0.01, 0.0),
    ParamRange::new("reverse", "Reverse", 0.0, 1.0, 1.0, 0.0),
];

impl HeartConfig {
    fn check(&self) -> Result<(), GenError> {
        for (name, value) in [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("d", self.d),
            ("e", self.e),
            ("twist", self.twist),
        ] {
            require_finite(name, value)?;
        }
        if require_finite("scale", self.scale)? < 0.0 {
            return Err(GenError::invalid("scale", "must not be negative"));
        }
        if !(self.shrink.is_finite() && self.shrink > 0.0) {
            warn!(shrink = self.shrink, "heart curve radius would never reach zero");
            return Err(GenError::NonTerminating(format!(
                "shrink must be positive, got {}",
                self.shrink
            )));
        }
        let expected = (1.0 / self.shrink).ceil();
        if expected > self.max_steps as f64 {
            warn!(shrink = self.shrink, max_steps = self.max_steps, "heart curve step cap");
            return Err(GenError::NonTerminating(format!(
                "shrink {} needs {} steps, cap is {}",
                self.shrink, expected, self.max_steps
            )));
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<Path, GenError> {
        self.check()?;
        let laps = STEPS_PER_REVOLUTION as f64;
        let mut points = vec![];
        let mut step = 0usize;
        loop {
            let r = 1.0 - step as f64 * self.shrink;
            if r <= 0.0 {
                break;
            }
            let t = (step as f64 / laps) * 2.0 * PI;
            let x = r * self.scale * (self.a * t.sin().powi(3));
            let y = r
                * self.scale
                * (self.b * t.cos()
                    - self.c * (2.0 * t).cos()
                    - self.d * (3.0 * t).cos()
                    - self.e * (4.0 * t).cos());
            points.push(rotate(coord! {x: x, y: y}, self.twist * t / laps));
            step += 1;
        }
        if self.reverse {
            points.reverse();
        }
        debug!(points = points.len(), shrink = self.shrink, reverse = self.reverse, "heart curve");
        Ok(LineString::new(points))
    }
}

impl PatternGenerator for HeartConfig {
    fn key(&self) -> &'static str {
        "heart"
    }

    fn generate_path(&self) -> Result<Path, GenError> {
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::abs;

    #[test]
    fn test_step_count() {
        let path = HeartConfig::default().generate().unwrap();
        assert_eq!(path.0.len(), 3334);

        let cfg = HeartConfig {
            shrink: 0.0007,
            ..Default::default()
        };
        assert_eq!(cfg.generate().unwrap().0.len(), 1429);
    }

    #[test]
    fn test_zero_shrink_is_rejected() {
        let cfg = HeartConfig {
            shrink: 0.0,
            ..Default::default()
        };
        assert!(matches!(cfg.generate(), Err(GenError::NonTerminating(_))));

        let cfg = HeartConfig {
            shrink: -0.001,
            ..Default::default()
        };
        assert!(matches!(cfg.generate(), Err(GenError::NonTerminating(_))));
    }

    #[test]
    fn test_step_cap() {
        let cfg = HeartConfig {
            shrink: 0.0003,
            max_steps: 1000,
            ..Default::default()
        };
        assert!(matches!(cfg.generate(), Err(GenError::NonTerminating(_))));
    }

    #[test]
    fn test_first_point_at_top_cusp() {
        // t = 0, r = 1: x = 0, y = scale * (b - c - d - e)
        let first = HeartConfig::default().generate().unwrap().0[0];
        assert!(abs(first.x) < 1e-12);
        assert!(abs(first.y - 10.0 * (13.0 - 5.0 - 2.0 - 1.0)) < 1e-9);
    }

    #[test]
    fn test_reverse() {
        let forward = HeartConfig::default().generate().unwrap();
        let backward = HeartConfig {
            reverse: true,
            ..Default::default()
        }
        .generate()
        .unwrap();
        let mut flipped = forward.0.clone();
        flipped.reverse();
        assert_eq!(backward.0, flipped);
    }

    #[test]
    fn test_twist_rotates_each_step() {
        let plain = HeartConfig::default().generate().unwrap();
        let twisted = HeartConfig {
            twist: 1.0,
            ..Default::default()
        }
        .generate()
        .unwrap();
        // Step 20: t = PI/2, twist angle = PI/160.
        let expected = rotate(plain.0[20], PI / 2.0 / 80.0);
        assert!(abs(twisted.0[20].x - expected.x) < 1e-9);
        assert!(abs(twisted.0[20].y - expected.y) < 1e-9);
        assert_eq!(plain.0[0], twisted.0[0]);
    }

    #[test]
    fn test_deterministic() {
        let cfg = HeartConfig {
            shrink: 0.0011,
            twist: -0.6,
            reverse: true,
            ..Default::default()
        };
        assert_eq!(cfg.generate().unwrap(), cfg.generate().unwrap());
    }

    #[test]
    fn test_rejects_negative_scale() {
        let cfg = HeartConfig {
            scale: -2.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.generate(),
            Err(GenError::InvalidParameter { name: "scale", .. })
        ));
    }
}
