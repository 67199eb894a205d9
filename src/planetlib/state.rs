//! Coordinate state of one body at one instant
//!
//! The numbers in [`BodyState::coords`] only mean something together with the
//! frame, expression and unit tags. The conversion methods keep the four
//! consistent; the plain setters do not, and callers using them are
//! responsible for coherence.

use crate::constants::TAU;
use crate::framelib::{CoordinateExpression, Frame};
use crate::planetlib::{Body, ComputationError};
use crate::units::{convert, convert_value, Unit};
use crate::{Result, SolarfieldError};
use nalgebra::{Matrix3, Vector3};

/// Position (3) and velocity (3) of a body with their bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub body: Body,
    pub coords: [f64; 6],
    /// `None` until a computation has placed the body in a frame
    pub frame: Option<Frame>,
    pub expression: CoordinateExpression,
    pub position_units: [Unit; 3],
    pub velocity_units: [Unit; 3],
    pub computation_error: Option<ComputationError>,
}

impl BodyState {
    /// Empty state: zero coordinates, no frame, unspecified units
    pub fn new(body: Body) -> Self {
        Self {
            body,
            coords: [0.0; 6],
            frame: None,
            expression: CoordinateExpression::Cartesian,
            position_units: [Unit::Unspecified; 3],
            velocity_units: [Unit::Unspecified; 3],
            computation_error: None,
        }
    }

    /// Cartesian state in AU and AU/day, in `frame`
    pub fn cartesian_au(
        body: Body,
        frame: Frame,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) -> Self {
        Self {
            body,
            coords: [
                position[0],
                position[1],
                position[2],
                velocity[0],
                velocity[1],
                velocity[2],
            ],
            frame: Some(frame),
            expression: CoordinateExpression::Cartesian,
            position_units: [Unit::Au; 3],
            velocity_units: [Unit::AuPerDay; 3],
            computation_error: None,
        }
    }

    pub fn position(&self) -> [f64; 3] {
        [self.coords[0], self.coords[1], self.coords[2]]
    }

    pub fn velocity(&self) -> [f64; 3] {
        [self.coords[3], self.coords[4], self.coords[5]]
    }

    pub fn set_position(&mut self, position: [f64; 3]) {
        self.coords[..3].copy_from_slice(&position);
    }

    pub fn set_velocity(&mut self, velocity: [f64; 3]) {
        self.coords[3..].copy_from_slice(&velocity);
    }

    pub fn position_vector(&self) -> Vector3<f64> {
        Vector3::from(self.position())
    }

    pub fn velocity_vector(&self) -> Vector3<f64> {
        Vector3::from(self.velocity())
    }

    /// Applies a rotation to position and velocity. Only meaningful for
    /// cartesian coordinates.
    pub fn rotate(&mut self, matrix: &Matrix3<f64>) {
        let position = matrix * self.position_vector();
        let velocity = matrix * self.velocity_vector();
        self.set_position(position.into());
        self.set_velocity(velocity.into());
    }

    /// Converts the coordinates to new units, axis by axis
    pub fn convert_units(&mut self, position_units: [Unit; 3], velocity_units: [Unit; 3]) -> Result<()> {
        let position = convert(self.position(), self.position_units, position_units)?;
        let velocity = convert(self.velocity(), self.velocity_units, velocity_units)?;
        self.set_position(position);
        self.set_velocity(velocity);
        self.position_units = position_units;
        self.velocity_units = velocity_units;
        Ok(())
    }

    /// Converts to `expression`; no-op when already there
    pub fn set_expression(&mut self, expression: CoordinateExpression, with_velocity: bool) -> Result<()> {
        match expression {
            CoordinateExpression::Cartesian => self.sphere_to_cart(with_velocity),
            CoordinateExpression::Spherical => self.cart_to_sphere(with_velocity),
        }
    }

    /// Cartesian to spherical `(rho, theta, phi)`, angles in radians, theta in
    /// `[0, 2π)`.
    ///
    /// Position axes with different units are first brought to km, velocity
    /// axes with different units to km/d. Rates of the angles come out in
    /// rad/d whatever the time unit of the input velocity.
    pub fn cart_to_sphere(&mut self, with_velocity: bool) -> Result<()> {
        if self.expression != CoordinateExpression::Cartesian {
            return Ok(());
        }
        require_specified(&self.position_units, "position", "cartesian to spherical")?;
        if with_velocity {
            require_specified(&self.velocity_units, "velocity", "cartesian to spherical")?;
        }

        let distance_unit = harmonized(&self.position_units, Unit::Km);
        let position = convert(self.position(), self.position_units, [distance_unit; 3])?;
        let (x, y, z) = (position[0], position[1], position[2]);
        let r2 = x * x + y * y;
        let rho = (r2 + z * z).sqrt();
        let (theta, phi) = if rho == 0.0 {
            (0.0, 0.0)
        } else {
            (y.atan2(x).rem_euclid(TAU), (z / rho).asin())
        };

        if with_velocity {
            let speed_unit = harmonized(&self.velocity_units, Unit::KmPerDay);
            // formulas need the position and velocity distance units to agree
            let p = convert(position, [distance_unit; 3], [Unit::Km; 3])?;
            let v = convert(self.velocity(), self.velocity_units, [Unit::KmPerDay; 3])?;
            let (x, y, z) = (p[0], p[1], p[2]);
            let (xp, yp, zp) = (v[0], v[1], v[2]);
            let r2 = x * x + y * y;
            let rho2 = r2 + z * z;

            let (drho, dtheta, dphi) = if rho2 == 0.0 {
                ((xp * xp + yp * yp + zp * zp).sqrt(), 0.0, 0.0)
            } else if r2 == 0.0 {
                ((x * xp + y * yp + z * zp) / rho2.sqrt(), 0.0, 0.0)
            } else {
                (
                    (x * xp + y * yp + z * zp) / rho2.sqrt(),
                    (x * yp - y * xp) / r2,
                    (r2 * zp - z * (x * xp + y * yp)) / (rho2 * r2.sqrt()),
                )
            };
            let drho = convert_value(drho, Unit::KmPerDay, speed_unit)?;
            self.set_velocity([drho, dtheta, dphi]);
            self.velocity_units = [speed_unit, Unit::RadPerDay, Unit::RadPerDay];
        }

        self.set_position([rho, theta, phi]);
        self.position_units = [distance_unit, Unit::Rad, Unit::Rad];
        self.expression = CoordinateExpression::Spherical;
        Ok(())
    }

    /// Spherical `(rho, theta, phi)` to cartesian. All three cartesian axes
    /// take the unit of rho, velocities the unit of d(rho)/dt.
    pub fn sphere_to_cart(&mut self, with_velocity: bool) -> Result<()> {
        if self.expression != CoordinateExpression::Spherical {
            return Ok(());
        }
        require_specified(&self.position_units, "position", "spherical to cartesian")?;
        if with_velocity {
            require_specified(&self.velocity_units, "velocity", "spherical to cartesian")?;
        }

        let distance_unit = self.position_units[0];
        let p = convert(
            self.position(),
            self.position_units,
            [distance_unit, Unit::Rad, Unit::Rad],
        )?;
        let (rho, theta, phi) = (p[0], p[1], p[2]);
        let (s_theta, c_theta) = theta.sin_cos();
        let (s_phi, c_phi) = phi.sin_cos();

        if with_velocity {
            let speed_unit = self.velocity_units[0];
            let rho_km = convert_value(rho, distance_unit, Unit::Km)?;
            let v = convert(
                self.velocity(),
                self.velocity_units,
                [Unit::KmPerDay, Unit::RadPerDay, Unit::RadPerDay],
            )?;
            let (drho, dtheta, dphi) = (v[0], v[1], v[2]);
            let velocity = [
                c_phi * c_theta * drho - rho_km * c_phi * s_theta * dtheta
                    - rho_km * s_phi * c_theta * dphi,
                c_phi * s_theta * drho + rho_km * c_phi * c_theta * dtheta
                    - rho_km * s_phi * s_theta * dphi,
                s_phi * drho + rho_km * c_phi * dphi,
            ];
            let velocity = convert(velocity, [Unit::KmPerDay; 3], [speed_unit; 3])?;
            self.set_velocity(velocity);
            self.velocity_units = [speed_unit; 3];
        }

        self.set_position([rho * c_phi * c_theta, rho * c_phi * s_theta, rho * s_phi]);
        self.position_units = [distance_unit; 3];
        self.expression = CoordinateExpression::Cartesian;
        Ok(())
    }
}

fn require_specified(units: &[Unit; 3], what: &str, conversion: &str) -> Result<()> {
    if units.contains(&Unit::Unspecified) {
        return Err(SolarfieldError::Configuration(format!(
            "{} conversion needs all {} units to be specified",
            conversion, what
        )));
    }
    Ok(())
}

/// The common unit of the three axes, or `fallback` if they differ
fn harmonized(units: &[Unit; 3], fallback: Unit) -> Unit {
    if units[0] == units[1] && units[0] == units[2] {
        units[0]
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG2RAD, KM_PER_AU};
    use approx::assert_relative_eq;
    use rand::Rng;

    fn cartesian(position: [f64; 3], velocity: [f64; 3]) -> BodyState {
        BodyState::cartesian_au(
            Body::Mars,
            Frame::Ecliptic,
            Vector3::from(position),
            Vector3::from(velocity),
        )
    }

    #[test]
    fn test_cart_to_sphere_values() {
        let mut state = cartesian([0.0, 2.0, 2.0], [0.0, 0.0, 0.0]);
        state.cart_to_sphere(false).unwrap();
        assert_eq!(state.expression, CoordinateExpression::Spherical);
        assert_eq!(state.position_units, [Unit::Au, Unit::Rad, Unit::Rad]);
        assert_relative_eq!(state.coords[0], 8.0f64.sqrt());
        assert_relative_eq!(state.coords[1], 90.0 * DEG2RAD, epsilon = 1e-12);
        assert_relative_eq!(state.coords[2], 45.0 * DEG2RAD, epsilon = 1e-12);
    }

    #[test]
    fn test_theta_normalized() {
        let mut state = cartesian([1.0, -1.0, 0.0], [0.0; 3]);
        state.cart_to_sphere(false).unwrap();
        assert_relative_eq!(state.coords[1], 315.0 * DEG2RAD, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_motion_rates() {
        // unit circle in the XY plane, 0.01 rad/day
        let mut state = cartesian([1.0, 0.0, 0.0], [0.0, 0.01, 0.0]);
        state.cart_to_sphere(true).unwrap();
        assert_eq!(
            state.velocity_units,
            [Unit::AuPerDay, Unit::RadPerDay, Unit::RadPerDay]
        );
        assert_relative_eq!(state.coords[3], 0.0, epsilon = 1e-15);
        assert_relative_eq!(state.coords[4], 0.01, epsilon = 1e-15);
        assert_relative_eq!(state.coords[5], 0.0, epsilon = 1e-15);

        // rising out of the plane: positive d(phi)/dt
        let mut state = cartesian([1.0, 0.0, 0.0], [0.0, 0.0, 0.01]);
        state.cart_to_sphere(true).unwrap();
        assert_relative_eq!(state.coords[5], 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_rates_in_rad_per_day_for_hourly_input() {
        let mut state = BodyState::new(Body::Moon);
        state.set_position([KM_PER_AU, 0.0, 0.0]);
        state.set_velocity([0.0, 1000.0, 0.0]);
        state.position_units = [Unit::Km; 3];
        state.velocity_units = [Unit::KmPerHour; 3];
        state.cart_to_sphere(true).unwrap();
        assert_relative_eq!(state.coords[4], 24_000.0 / KM_PER_AU, max_relative = 1e-12);
        assert_eq!(state.velocity_units[0], Unit::KmPerHour);
    }

    #[test]
    fn test_mixed_position_units_harmonized_to_km() {
        let mut state = BodyState::new(Body::Venus);
        state.set_position([1.0, 0.0, 1000.0]);
        state.position_units = [Unit::Au, Unit::Km, Unit::M];
        state.cart_to_sphere(false).unwrap();
        assert_eq!(state.position_units[0], Unit::Km);
        assert_relative_eq!(state.coords[0], (KM_PER_AU * KM_PER_AU + 1.0).sqrt());
    }

    #[test]
    fn test_origin_is_degenerate_but_finite() {
        let mut state = cartesian([0.0; 3], [0.0, 3.0, 4.0]);
        state.cart_to_sphere(true).unwrap();
        assert_eq!(state.position(), [0.0, 0.0, 0.0]);
        assert_relative_eq!(state.coords[3], 5.0, epsilon = 1e-12);
        assert!(state.coords.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_unspecified_units_rejected() {
        let mut state = BodyState::new(Body::Earth);
        state.set_position([1.0, 0.0, 0.0]);
        assert!(matches!(
            state.cart_to_sphere(false),
            Err(SolarfieldError::Configuration(_))
        ));

        let mut state = cartesian([1.0, 0.0, 0.0], [0.0; 3]);
        state.velocity_units[2] = Unit::Unspecified;
        assert!(state.cart_to_sphere(false).is_ok());
        let mut state = cartesian([1.0, 0.0, 0.0], [0.0; 3]);
        state.velocity_units[2] = Unit::Unspecified;
        assert!(state.cart_to_sphere(true).is_err());
    }

    #[test]
    fn test_roundtrip_restores_state() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let p = [
                rng.gen_range(-40.0..40.0),
                rng.gen_range(-40.0..40.0),
                rng.gen_range(-40.0..40.0),
            ];
            let v = [
                rng.gen_range(-0.02..0.02),
                rng.gen_range(-0.02..0.02),
                rng.gen_range(-0.02..0.02),
            ];
            let original = cartesian(p, v);
            let mut state = original;
            state.cart_to_sphere(true).unwrap();
            state.sphere_to_cart(true).unwrap();
            assert_eq!(state.expression, CoordinateExpression::Cartesian);
            assert_eq!(state.position_units, [Unit::Au; 3]);
            assert_eq!(state.velocity_units, [Unit::AuPerDay; 3]);
            for i in 0..6 {
                assert_relative_eq!(
                    state.coords[i],
                    original.coords[i],
                    epsilon = 1e-12,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_sphere_to_cart_with_degrees() {
        let mut state = BodyState::new(Body::Jupiter);
        state.expression = CoordinateExpression::Spherical;
        state.set_position([2.0, 90.0, 0.0]);
        state.position_units = [Unit::Au, Unit::Deg, Unit::Deg];
        state.sphere_to_cart(false).unwrap();
        assert_eq!(state.expression, CoordinateExpression::Cartesian);
        assert_relative_eq!(state.coords[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(state.coords[1], 2.0);
        assert_eq!(state.position_units, [Unit::Au; 3]);
    }

    #[test]
    fn test_rotate_and_convert() {
        let mut state = cartesian([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let quarter = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        state.rotate(&quarter);
        assert_eq!(state.position(), [0.0, 1.0, 0.0]);
        assert_eq!(state.velocity(), [-1.0, 0.0, 0.0]);

        state
            .convert_units([Unit::Km; 3], [Unit::KmPerDay; 3])
            .unwrap();
        assert_relative_eq!(state.coords[1], KM_PER_AU);
        assert!(state
            .convert_units([Unit::Deg; 3], [Unit::KmPerDay; 3])
            .is_err());
    }
}
