use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid term '{0}'. Expected PARTICLE:FX,FY,FZ (e.g. 0:-0.1,0.0,0.1).")]
    InvalidFormat(String),
    #[error("Invalid particle index '{value}' in term '{term}'")]
    InvalidParticle { term: String, value: String },
    #[error("Invalid force component '{value}' in term '{term}'")]
    InvalidComponent { term: String, value: String },
}

/// Parses a term specification of the form `PARTICLE:FX,FY,FZ`.
pub fn parse_term(input: &str) -> Result<(usize, Vector3<f64>), ParseError> {
    let (particle_str, force_str) = input
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidFormat(input.to_string()))?;

    let particle = particle_str
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidParticle {
            term: input.to_string(),
            value: particle_str.to_string(),
        })?;

    let components = force_str
        .split(',')
        .map(|component| {
            component
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidComponent {
                    term: input.to_string(),
                    value: component.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components.as_slice() {
        [fx, fy, fz] => Ok((particle, Vector3::new(*fx, *fy, *fz))),
        _ => Err(ParseError::InvalidFormat(input.to_string())),
    }
}
