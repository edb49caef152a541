use super::error::EngineError;
use nalgebra::{Point3, Vector3};
use std::ops::BitOr;

/// Selects which quantities a [`State`] should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataTypes {
    pub positions: bool,
    pub forces: bool,
    pub energy: bool,
}

impl DataTypes {
    pub const POSITIONS: Self = Self {
        positions: true,
        forces: false,
        energy: false,
    };
    pub const FORCES: Self = Self {
        positions: false,
        forces: true,
        energy: false,
    };
    pub const ENERGY: Self = Self {
        positions: false,
        forces: false,
        energy: true,
    };
}

impl BitOr for DataTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            positions: self.positions || rhs.positions,
            forces: self.forces || rhs.forces,
            energy: self.energy || rhs.energy,
        }
    }
}

/// A snapshot of the quantities computed for one execution step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    positions: Option<Vec<Point3<f64>>>,
    forces: Option<Vec<Vector3<f64>>>,
    potential_energy: Option<f64>,
}

impl State {
    pub(crate) fn new(
        positions: Option<Vec<Point3<f64>>>,
        forces: Option<Vec<Vector3<f64>>>,
        potential_energy: Option<f64>,
    ) -> Self {
        Self {
            positions,
            forces,
            potential_energy,
        }
    }

    pub fn positions(&self) -> Result<&[Point3<f64>], EngineError> {
        self.positions
            .as_deref()
            .ok_or(EngineError::StateDataMissing("positions"))
    }

    pub fn forces(&self) -> Result<&[Vector3<f64>], EngineError> {
        self.forces
            .as_deref()
            .ok_or(EngineError::StateDataMissing("forces"))
    }

    pub fn potential_energy(&self) -> Result<f64, EngineError> {
        self.potential_energy
            .ok_or(EngineError::StateDataMissing("energy"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitor_combines_requested_quantities() {
        let types = DataTypes::ENERGY | DataTypes::FORCES;
        assert!(types.energy);
        assert!(types.forces);
        assert!(!types.positions);
    }

    #[test]
    fn missing_quantities_are_reported_as_errors() {
        let state = State::new(None, Some(vec![Vector3::zeros()]), None);
        assert_eq!(state.forces().unwrap().len(), 1);
        assert!(matches!(
            state.potential_energy(),
            Err(EngineError::StateDataMissing("energy"))
        ));
        assert!(matches!(
            state.positions(),
            Err(EngineError::StateDataMissing("positions"))
        ));
    }
}
